pub mod ids;
pub mod contact;
pub mod reminder;

// Re-exports for convenience
pub use ids::Id;
pub use contact::Contact;
pub use reminder::Reminder;
