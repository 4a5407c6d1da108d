use crate::types::location::{Coordinates, Location};
use std::collections::HashMap;

/// Read access to geocoded addresses. `None` means the address has not been
/// resolved (yet), which is a normal answer.
pub trait LocationLookup {
    fn coordinates(&self, address: &str) -> Option<Coordinates>;
}

/// Locations of a set of addresses taken at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSnapshot {
    locations: HashMap<String, Location>,
}

impl LocationSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: Location) {
        self.locations.insert(location.address.clone(), location);
    }

    pub fn get(&self, address: &str) -> Option<&Location> {
        self.locations.get(address)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromIterator<Location> for LocationSnapshot {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        let mut snapshot = LocationSnapshot::new();
        for location in iter {
            snapshot.insert(location);
        }
        snapshot
    }
}

impl LocationLookup for LocationSnapshot {
    fn coordinates(&self, address: &str) -> Option<Coordinates> {
        self.locations
            .get(address)
            .map(|location| location.coordinates)
    }
}

impl LocationLookup for HashMap<String, Coordinates> {
    fn coordinates(&self, address: &str) -> Option<Coordinates> {
        self.get(address).copied()
    }
}
