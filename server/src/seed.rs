use common::errors::DispatchError;
use common::types::catalog::{MenuEntry, Product, Restaurant};
use common::types::location::Coordinates;
use common::types::order::OrderForm;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Seed file bundled with the server, used when no path is given on the command line.
pub const DEFAULT_SEED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/seed.json");

/// Address known to the simulated geocoder.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedAddress {
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Initial data of the server: catalog, geocoder table and orders to place.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub restaurants: Vec<Restaurant>,
    pub menu: Vec<MenuEntry>,
    #[serde(default)]
    pub geocoding: Vec<GeocodedAddress>,
    #[serde(default)]
    pub geocoder_failure_probability: f32,
    #[serde(default)]
    pub orders: Vec<OrderForm>,
}

impl SeedData {
    pub async fn load(path: &Path) -> Result<Self, DispatchError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, DispatchError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn geocoding_table(&self) -> HashMap<String, Coordinates> {
        self.geocoding
            .iter()
            .map(|entry| {
                (
                    entry.address.clone(),
                    Coordinates::new(entry.longitude, entry.latitude),
                )
            })
            .collect()
    }
}
