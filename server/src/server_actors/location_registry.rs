use crate::messages::internal_messages::{GetLocations, LocateAddress};
use actix::prelude::*;
use colored::Color;
use common::dispatch::LocationSnapshot;
use common::geocoding::Geocoder;
use common::logger::Logger;
use common::types::location::Location;
use std::collections::HashMap;

/// The `LocationRegistry` actor caches geocoded addresses.
///
/// Addresses are geocoded lazily, the first time someone asks to locate
/// them. Failed lookups are not cached, so the next `LocateAddress` asks the
/// geocoder again. Cached locations are never refreshed.
pub struct LocationRegistry {
    /// Known locations by address.
    pub locations: HashMap<String, Location>,
    pub geocoder: Box<dyn Geocoder>,
    pub logger: Logger,
}

impl LocationRegistry {
    pub fn new(geocoder: Box<dyn Geocoder>) -> Self {
        Self {
            locations: HashMap::new(),
            geocoder,
            logger: Logger::new("Locations", Color::Cyan),
        }
    }
}

impl Actor for LocationRegistry {
    type Context = Context<Self>;
}

impl Handler<LocateAddress> for LocationRegistry {
    type Result = MessageResult<LocateAddress>;

    fn handle(&mut self, msg: LocateAddress, _ctx: &mut Self::Context) -> Self::Result {
        if let Some(location) = self.locations.get(&msg.address) {
            self.logger
                .debug(format!("Cache hit for address: {}", msg.address));
            return MessageResult(Some(location.clone()));
        }

        self.logger
            .debug(format!("Cache miss for address: {}", msg.address));
        match self.geocoder.fetch_coordinates(&msg.address) {
            Some(coordinates) => {
                let location = self
                    .locations
                    .entry(msg.address.clone())
                    .or_insert_with(|| Location::new(msg.address, coordinates));
                MessageResult(Some(location.clone()))
            }
            None => {
                self.logger
                    .warn(format!("Could not geocode address: {}", msg.address));
                MessageResult(None)
            }
        }
    }
}

impl Handler<GetLocations> for LocationRegistry {
    type Result = MessageResult<GetLocations>;

    fn handle(&mut self, msg: GetLocations, _ctx: &mut Self::Context) -> Self::Result {
        let snapshot: LocationSnapshot = msg
            .addresses
            .iter()
            .filter_map(|address| self.locations.get(address).cloned())
            .collect();
        MessageResult(snapshot)
    }
}
