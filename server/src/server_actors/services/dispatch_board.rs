use crate::messages::internal_messages::{
    GetLocations, GetMenuSnapshot, GetOrder, GetOrders, SetProcessingRestaurant,
};
use crate::messages::messages::{AssignRestaurant, DispatchEntry, GetDispatchBoard};
use crate::server_actors::location_registry::LocationRegistry;
use crate::server_actors::storage::Storage;
use actix::prelude::*;
use colored::Color;
use common::dispatch::{available_restaurants_for_products, get_ranked_restaurants_for_order};
use common::errors::DispatchError;
use common::logger::Logger;
use common::types::order::sort_orders_by_status;
use std::collections::BTreeSet;

/// The `DispatchBoard` actor backs the operators' view of the orders: each
/// order with the restaurants able to cook it, closest first, and the
/// assignment of an order to one of them.
pub struct DispatchBoard {
    pub storage_addr: Addr<Storage>,
    pub locations_addr: Addr<LocationRegistry>,
    pub logger: Logger,
}

impl DispatchBoard {
    pub fn new(storage_addr: Addr<Storage>, locations_addr: Addr<LocationRegistry>) -> Self {
        Self {
            storage_addr,
            locations_addr,
            logger: Logger::new("Dispatch Board", Color::Magenta),
        }
    }
}

impl Actor for DispatchBoard {
    type Context = Context<Self>;
}

impl Handler<GetDispatchBoard> for DispatchBoard {
    type Result = ResponseFuture<Result<Vec<DispatchEntry>, DispatchError>>;

    fn handle(&mut self, _msg: GetDispatchBoard, _ctx: &mut Self::Context) -> Self::Result {
        let storage_addr = self.storage_addr.clone();
        let locations_addr = self.locations_addr.clone();
        let logger = self.logger.clone();

        Box::pin(async move {
            let menu = storage_addr.send(GetMenuSnapshot).await??;
            let orders = storage_addr.send(GetOrders).await?;

            // Every address involved, read from the cache in one go.
            let addresses: BTreeSet<String> = orders
                .iter()
                .map(|order| order.address.clone())
                .chain(menu.restaurants().map(|restaurant| restaurant.address.clone()))
                .collect();
            let locations = locations_addr
                .send(GetLocations {
                    addresses: addresses.into_iter().collect(),
                })
                .await?;

            let entries: Vec<DispatchEntry> = sort_orders_by_status(orders)
                .into_iter()
                .map(|order| {
                    let candidates = get_ranked_restaurants_for_order(&order, &menu, &locations)
                        .unwrap_or_else(|e| {
                            logger.error(format!(
                                "Cannot rank restaurants for order {}: {e}",
                                order.id
                            ));
                            Vec::new()
                        });
                    DispatchEntry {
                        total_price: order.total_price(),
                        order,
                        candidates,
                    }
                })
                .collect();

            logger.debug(format!("Dispatch board built with {} orders", entries.len()));
            Ok(entries)
        })
    }
}

impl Handler<AssignRestaurant> for DispatchBoard {
    type Result = ResponseFuture<Result<(), DispatchError>>;

    fn handle(&mut self, msg: AssignRestaurant, _ctx: &mut Self::Context) -> Self::Result {
        let storage_addr = self.storage_addr.clone();
        let logger = self.logger.clone();

        Box::pin(async move {
            let order = storage_addr
                .send(GetOrder {
                    order_id: msg.order_id,
                })
                .await?
                .ok_or(DispatchError::UnknownOrder(msg.order_id))?;
            let menu = storage_addr.send(GetMenuSnapshot).await??;

            let candidates = available_restaurants_for_products(&order.product_ids(), &menu)?;
            if !candidates.contains(&msg.restaurant_id) {
                logger.warn(format!(
                    "Restaurant {} cannot prepare order {}",
                    msg.restaurant_id, msg.order_id
                ));
                return Err(DispatchError::RestaurantCannotFulfil {
                    order_id: msg.order_id,
                    restaurant_id: msg.restaurant_id,
                });
            }

            storage_addr
                .send(SetProcessingRestaurant {
                    order_id: msg.order_id,
                    restaurant_id: msg.restaurant_id,
                })
                .await?
        })
    }
}
