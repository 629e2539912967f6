pub mod date;
pub mod error_messages;
pub mod validation;
