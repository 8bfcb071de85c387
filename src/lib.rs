pub mod error;
pub mod validation;
pub mod model;
pub mod store;
pub mod persist;
pub mod ops;
pub mod queries;
pub mod session;
pub mod cli;
