use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Processing, // Received, waiting for a restaurant
    Cooking,    // The assigned restaurant is cooking it
    Delivering, // On the way to the customer
    Completed,  // Delivered
}

impl OrderStatus {
    /// Position of the status on the dispatch board. Orders waiting for a
    /// restaurant come first, then the ones on the road, then the kitchen.
    pub fn board_rank(&self) -> u8 {
        match self {
            OrderStatus::Processing => 0,
            OrderStatus::Delivering => 1,
            OrderStatus::Cooking => 2,
            OrderStatus::Completed => 3,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Processing => write!(f, "Processing"),
            OrderStatus::Cooking => write!(f, "Cooking"),
            OrderStatus::Delivering => write!(f, "Delivering"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    Card,
    Cash,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Card => write!(f, "Card"),
            PaymentType::Cash => write!(f, "Cash"),
        }
    }
}
