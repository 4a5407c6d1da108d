use crate::messages::internal_messages::{AddOrder, GetMenuSnapshot, LocateAddress};
use crate::messages::messages::RegisterOrder;
use crate::server_actors::location_registry::LocationRegistry;
use crate::server_actors::storage::Storage;
use actix::prelude::*;
use chrono::Local;
use colored::Color;
use common::dispatch::{MenuSnapshot, available_restaurants_for_products};
use common::errors::DispatchError;
use common::logger::Logger;
use common::types::ids::OrderId;
use common::types::order::{Order, OrderForm, OrderLine};
use common::types::order_status::OrderStatus;

/// The `OrderIntakeService` actor accepts orders from customers.
///
/// ## Responsibilities:
/// - Reject malformed forms and orders no restaurant can cook.
/// - Geocode the delivery address so the dispatch board can rank it.
/// - Copy current product prices into the order lines and store the order.
pub struct OrderIntakeService {
    /// The address of the Storage actor.
    pub storage_addr: Addr<Storage>,
    /// The address of the LocationRegistry actor.
    pub locations_addr: Addr<LocationRegistry>,
    pub logger: Logger,
}

impl OrderIntakeService {
    pub fn new(storage_addr: Addr<Storage>, locations_addr: Addr<LocationRegistry>) -> Self {
        Self {
            storage_addr,
            locations_addr,
            logger: Logger::new("Order Intake", Color::Green),
        }
    }

    /// Builds the order to store from a checked form.
    fn build_order(form: OrderForm, menu: &MenuSnapshot) -> Result<Order, DispatchError> {
        let lines = form
            .lines
            .iter()
            .map(|line| {
                let product = menu
                    .product(line.product_id)
                    .ok_or(DispatchError::UnknownProduct(line.product_id))?;
                Ok(OrderLine {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    product_price: product.price,
                })
            })
            .collect::<Result<Vec<_>, DispatchError>>()?;

        Ok(Order {
            id: 0,
            firstname: form.firstname,
            lastname: form.lastname,
            phonenumber: form.phonenumber,
            address: form.address,
            status: OrderStatus::Processing,
            payment_type: form.payment_type,
            comment: form.comment,
            processing_restaurant: None,
            lines,
            created_at: Local::now(),
        })
    }
}

impl Actor for OrderIntakeService {
    type Context = Context<Self>;
}

impl Handler<RegisterOrder> for OrderIntakeService {
    type Result = ResponseFuture<Result<OrderId, DispatchError>>;

    fn handle(&mut self, msg: RegisterOrder, _ctx: &mut Self::Context) -> Self::Result {
        let storage_addr = self.storage_addr.clone();
        let locations_addr = self.locations_addr.clone();
        let logger = self.logger.clone();
        let form = msg.form;

        Box::pin(async move {
            if let Err(e) = form.validate() {
                logger.warn(format!("Rejected malformed order: {e}"));
                return Err(e);
            }

            let menu = storage_addr.send(GetMenuSnapshot).await??;
            let candidates = available_restaurants_for_products(&form.product_ids(), &menu)?;
            if candidates.is_empty() {
                logger.warn(format!(
                    "No restaurant can prepare the order for {}",
                    form.address
                ));
                return Err(DispatchError::NoRestaurantAvailable);
            }
            logger.debug(format!(
                "{} restaurants can prepare the order for {}",
                candidates.len(),
                form.address
            ));

            let location = locations_addr
                .send(LocateAddress {
                    address: form.address.clone(),
                })
                .await?;
            if location.is_none() {
                logger.warn(format!(
                    "Delivery address {} is not geocoded, distances will be unknown",
                    form.address
                ));
            }

            let order = Self::build_order(form, &menu)?;
            let order_id = storage_addr.send(AddOrder { order }).await?;
            logger.info(format!("Registered order {order_id}"));
            Ok(order_id)
        })
    }
}
