use common::geocoding::Geocoder;
use common::types::location::Coordinates;
use common::utils::random_bool_by_given_probability;
use std::collections::HashMap;

/// Stand-in for a geocoding provider: answers from a fixed table and fails
/// at random with `failure_probability`, like a flaky remote service.
pub struct SeededGeocoder {
    pub table: HashMap<String, Coordinates>,
    pub failure_probability: f32,
}

impl SeededGeocoder {
    pub fn new(table: HashMap<String, Coordinates>, failure_probability: f32) -> Self {
        Self {
            table,
            failure_probability,
        }
    }
}

impl Geocoder for SeededGeocoder {
    fn fetch_coordinates(&self, address: &str) -> Option<Coordinates> {
        if random_bool_by_given_probability(self.failure_probability) {
            return None;
        }
        self.table.get(address).copied()
    }
}
