pub mod internal_messages;
pub mod messages;
