pub mod contact_queries;
pub mod reminder_queries;
