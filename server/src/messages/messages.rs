use actix::Message;
use common::dispatch::RankedRestaurant;
use common::errors::DispatchError;
use common::types::ids::{OrderId, RestaurantId};
use common::types::order::{Order, OrderForm};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Message to place a new order.
///
/// ## Purpose
/// The order is stored only if it is well formed and at least one
/// restaurant can cook all of its products.
///
/// ## Contents
/// - `form`: The [`OrderForm`] filled in by the customer.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<OrderId, DispatchError>")]
pub struct RegisterOrder {
    pub form: OrderForm,
}

/// Message to build the operators' dispatch board.
#[derive(Message, Debug)]
#[rtype(result = "Result<Vec<DispatchEntry>, DispatchError>")]
pub struct GetDispatchBoard;

/// Message to hand an order to one of its candidate restaurants.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<(), DispatchError>")]
pub struct AssignRestaurant {
    pub order_id: OrderId,
    pub restaurant_id: RestaurantId,
}

/// One row of the dispatch board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchEntry {
    pub order: Order,
    pub total_price: Decimal,
    /// Restaurants able to cook the order, closest first.
    pub candidates: Vec<RankedRestaurant>,
}
