pub mod catalog;
pub mod ids;
pub mod location;
pub mod order;
pub mod order_status;
