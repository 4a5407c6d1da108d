mod geocoder;
mod messages;
mod seed;
mod server_actors;

use crate::geocoder::SeededGeocoder;
use crate::messages::internal_messages::{
    AddProduct, AddRestaurant, GetMenuSnapshot, LocateAddress, SetMenuEntry,
};
use crate::messages::messages::{AssignRestaurant, DispatchEntry, GetDispatchBoard, RegisterOrder};
use crate::seed::{DEFAULT_SEED_PATH, SeedData};
use crate::server_actors::location_registry::LocationRegistry;
use crate::server_actors::services::dispatch_board::DispatchBoard;
use crate::server_actors::services::order_intake::OrderIntakeService;
use crate::server_actors::storage::Storage;
use actix::prelude::*;
use colored::Color;
use common::errors::DispatchError;
use common::logger::Logger;
use common::types::order_status::OrderStatus;
use std::env;
use std::path::PathBuf;

#[actix::main]
async fn main() -> Result<(), DispatchError> {
    let logger = Logger::new("Server", Color::Blue);
    let seed_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH));

    logger.info(format!("Loading seed data from {}", seed_path.display()));
    let seed = SeedData::load(&seed_path).await?;

    let storage = Storage::new().start();
    let geocoder = SeededGeocoder::new(seed.geocoding_table(), seed.geocoder_failure_probability);
    let locations = LocationRegistry::new(Box::new(geocoder)).start();

    for product in seed.products {
        storage.send(AddProduct { product }).await?;
    }
    for restaurant in seed.restaurants {
        locations
            .send(LocateAddress {
                address: restaurant.address.clone(),
            })
            .await?;
        storage.send(AddRestaurant { restaurant }).await?;
    }
    for entry in seed.menu {
        storage.send(SetMenuEntry { entry }).await??;
    }

    let menu = storage.send(GetMenuSnapshot).await??;
    let storefront: Vec<&str> = menu
        .available_products()
        .into_iter()
        .map(|product| product.name.as_str())
        .collect();
    logger.info(format!("Products on sale: {}", storefront.join(", ")));

    let intake = OrderIntakeService::new(storage.clone(), locations.clone()).start();
    let board = DispatchBoard::new(storage, locations).start();

    for form in seed.orders {
        let customer = format!("{} {}", form.firstname, form.lastname);
        match intake.send(RegisterOrder { form }).await? {
            Ok(order_id) => logger.info(format!("Order {order_id} accepted for {customer}")),
            Err(e) => logger.warn(format!("Order of {customer} rejected: {e}")),
        }
    }

    let entries = board.send(GetDispatchBoard).await??;
    print_board(&logger, &entries);

    // Hand every waiting order to its closest located restaurant.
    for entry in entries
        .iter()
        .filter(|entry| entry.order.status == OrderStatus::Processing)
    {
        let Some(closest) = entry.candidates.iter().find(|c| c.is_resolved()) else {
            logger.warn(format!(
                "Order {} needs manual dispatch: no located restaurant",
                entry.order.id
            ));
            continue;
        };
        board
            .send(AssignRestaurant {
                order_id: entry.order.id,
                restaurant_id: closest.restaurant.id,
            })
            .await??;
    }

    let entries = board.send(GetDispatchBoard).await??;
    print_board(&logger, &entries);

    Ok(())
}

fn print_board(logger: &Logger, entries: &[DispatchEntry]) {
    logger.info(format!("Dispatch board: {} orders", entries.len()));
    for entry in entries {
        let order = &entry.order;
        let assigned = order
            .processing_restaurant
            .map(|id| format!(", cooked by restaurant {id}"))
            .unwrap_or_default();
        logger.info(format!(
            "Order {} [{}] {} - {} RUB{}",
            order.id, order.status, order.address, entry.total_price, assigned
        ));
        if entry.candidates.is_empty() {
            logger.warn("    no restaurant can prepare this order");
        }
        for candidate in &entry.candidates {
            logger.info(format!("    {candidate}"));
        }
    }
}
