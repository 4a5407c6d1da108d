use actix::Message;
use common::dispatch::{LocationSnapshot, MenuSnapshot};
use common::errors::DispatchError;
use common::types::catalog::{MenuEntry, Product, Restaurant};
use common::types::ids::{OrderId, RestaurantId};
use common::types::location::Location;
use common::types::order::Order;

/////////////////////////////////////////////////////////////////////
// Storage messages
/////////////////////////////////////////////////////////////////////

/// Message to add or replace a restaurant in the catalog.
///
/// ## Contents
/// - `restaurant`: The [`Restaurant`] to store, keyed by its id.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct AddRestaurant {
    pub restaurant: Restaurant,
}

/// Message to add or replace a product in the catalog.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct AddProduct {
    pub product: Product,
}

/// Message to list a product on a restaurant's menu, or to change its
/// availability if it is already listed.
///
/// ## Contents
/// - `entry`: The [`MenuEntry`]; its restaurant and product must exist.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<(), DispatchError>")]
pub struct SetMenuEntry {
    pub entry: MenuEntry,
}

/// Message to take an immutable copy of the catalog.
#[derive(Message, Debug)]
#[rtype(result = "Result<MenuSnapshot, DispatchError>")]
pub struct GetMenuSnapshot;

/// Message to store a new order. The storage assigns the id and returns it.
#[derive(Message, Debug, Clone)]
#[rtype(result = "OrderId")]
pub struct AddOrder {
    pub order: Order,
}

#[derive(Message, Debug)]
#[rtype(result = "Option<Order>")]
pub struct GetOrder {
    pub order_id: OrderId,
}

/// Message to list every stored order, by ascending id.
#[derive(Message, Debug)]
#[rtype(result = "Vec<Order>")]
pub struct GetOrders;

/// Message to record which restaurant cooks an order.
///
/// ## Purpose
/// A `Processing` order moves to `Cooking` once it has a restaurant.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<(), DispatchError>")]
pub struct SetProcessingRestaurant {
    pub order_id: OrderId,
    pub restaurant_id: RestaurantId,
}

/////////////////////////////////////////////////////////////////////
// Location registry messages
/////////////////////////////////////////////////////////////////////

/// Message to get the location of an address, geocoding it on first use.
///
/// ## Contents
/// - `address`: The postal address, used verbatim as the cache key.
#[derive(Message, Debug, Clone)]
#[rtype(result = "Option<Location>")]
pub struct LocateAddress {
    pub address: String,
}

/// Message to read the already known locations of some addresses.
///
/// ## Purpose
/// Gives the ranking one consistent view of the cache. Never geocodes.
#[derive(Message, Debug, Clone)]
#[rtype(result = "LocationSnapshot")]
pub struct GetLocations {
    pub addresses: Vec<String>,
}
