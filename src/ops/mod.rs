pub mod contact_ops;
pub mod reminder_ops;
