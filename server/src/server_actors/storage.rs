use crate::messages::internal_messages::{
    AddOrder, AddProduct, AddRestaurant, GetMenuSnapshot, GetOrder, GetOrders, SetMenuEntry,
    SetProcessingRestaurant,
};
use actix::prelude::*;
use colored::Color;
use common::dispatch::MenuSnapshot;
use common::errors::DispatchError;
use common::logger::Logger;
use common::types::catalog::{MenuEntry, Product, Restaurant};
use common::types::ids::{OrderId, ProductId, RestaurantId};
use common::types::order::Order;
use common::types::order_status::OrderStatus;
use std::collections::BTreeMap;

/// The `Storage` actor owns the catalog (restaurants, products, menus) and
/// the placed orders.
///
/// # Responsibilities
/// - Keeps at most one menu entry per restaurant and product.
/// - Hands out immutable [`MenuSnapshot`]s for dispatch computations.
/// - Assigns order ids and records which restaurant cooks each order.
pub struct Storage {
    /// Restaurants by id.
    pub restaurants: BTreeMap<RestaurantId, Restaurant>,
    /// Products by id.
    pub products: BTreeMap<ProductId, Product>,
    /// Menu entries keyed by (restaurant, product).
    pub menu: BTreeMap<(RestaurantId, ProductId), MenuEntry>,
    /// Placed orders by id.
    pub orders: BTreeMap<OrderId, Order>,
    /// Id given to the next stored order.
    pub next_order_id: OrderId,
    pub logger: Logger,
}

impl Storage {
    pub fn new() -> Self {
        Self {
            restaurants: BTreeMap::new(),
            products: BTreeMap::new(),
            menu: BTreeMap::new(),
            orders: BTreeMap::new(),
            next_order_id: 1,
            logger: Logger::new("Storage", Color::White),
        }
    }

    fn order_mut(&mut self, order_id: OrderId) -> Result<&mut Order, DispatchError> {
        self.orders
            .get_mut(&order_id)
            .ok_or(DispatchError::UnknownOrder(order_id))
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for Storage {
    type Context = Context<Self>;
}

impl Handler<AddRestaurant> for Storage {
    type Result = ();

    fn handle(&mut self, msg: AddRestaurant, _ctx: &mut Self::Context) -> Self::Result {
        self.logger.debug(format!(
            "Storing restaurant {} ({})",
            msg.restaurant.id, msg.restaurant.name
        ));
        self.restaurants.insert(msg.restaurant.id, msg.restaurant);
    }
}

impl Handler<AddProduct> for Storage {
    type Result = ();

    fn handle(&mut self, msg: AddProduct, _ctx: &mut Self::Context) -> Self::Result {
        self.logger.debug(format!(
            "Storing product {} ({})",
            msg.product.id, msg.product.name
        ));
        self.products.insert(msg.product.id, msg.product);
    }
}

impl Handler<SetMenuEntry> for Storage {
    type Result = Result<(), DispatchError>;

    fn handle(&mut self, msg: SetMenuEntry, _ctx: &mut Self::Context) -> Self::Result {
        let entry = msg.entry;
        if !self.restaurants.contains_key(&entry.restaurant_id) {
            self.logger.warn(format!(
                "Menu entry for unknown restaurant {}",
                entry.restaurant_id
            ));
            return Err(DispatchError::UnknownRestaurant(entry.restaurant_id));
        }
        if !self.products.contains_key(&entry.product_id) {
            self.logger
                .warn(format!("Menu entry for unknown product {}", entry.product_id));
            return Err(DispatchError::UnknownProduct(entry.product_id));
        }
        self.menu
            .insert((entry.restaurant_id, entry.product_id), entry);
        Ok(())
    }
}

impl Handler<GetMenuSnapshot> for Storage {
    type Result = Result<MenuSnapshot, DispatchError>;

    fn handle(&mut self, _msg: GetMenuSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        MenuSnapshot::new(
            self.restaurants.values().cloned(),
            self.products.values().cloned(),
            self.menu.values().copied().collect(),
        )
    }
}

impl Handler<AddOrder> for Storage {
    type Result = MessageResult<AddOrder>;

    fn handle(&mut self, msg: AddOrder, _ctx: &mut Self::Context) -> Self::Result {
        let order_id = self.next_order_id;
        self.next_order_id += 1;

        let mut order = msg.order;
        order.id = order_id;
        self.logger.info(format!(
            "Stored order {} for {} ({} lines)",
            order_id,
            order.address,
            order.lines.len()
        ));
        self.orders.insert(order_id, order);
        MessageResult(order_id)
    }
}

impl Handler<GetOrder> for Storage {
    type Result = MessageResult<GetOrder>;

    fn handle(&mut self, msg: GetOrder, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.orders.get(&msg.order_id).cloned())
    }
}

impl Handler<GetOrders> for Storage {
    type Result = MessageResult<GetOrders>;

    fn handle(&mut self, _msg: GetOrders, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.orders.values().cloned().collect())
    }
}

impl Handler<SetProcessingRestaurant> for Storage {
    type Result = Result<(), DispatchError>;

    fn handle(&mut self, msg: SetProcessingRestaurant, _ctx: &mut Self::Context) -> Self::Result {
        if !self.restaurants.contains_key(&msg.restaurant_id) {
            return Err(DispatchError::UnknownRestaurant(msg.restaurant_id));
        }
        let order = self.order_mut(msg.order_id)?;
        order.processing_restaurant = Some(msg.restaurant_id);
        if order.status == OrderStatus::Processing {
            order.status = OrderStatus::Cooking;
        }
        self.logger.info(format!(
            "Order {} assigned to restaurant {}",
            msg.order_id, msg.restaurant_id
        ));
        Ok(())
    }
}
