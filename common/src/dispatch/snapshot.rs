use crate::dispatch::availability::AvailabilityIndex;
use crate::errors::DispatchError;
use crate::types::catalog::{MenuEntry, Product, Restaurant};
use crate::types::ids::{ProductId, RestaurantId};
use std::collections::{BTreeMap, HashSet};

/// Immutable view of the catalog used for one dispatch computation:
/// restaurants, products, menu entries and the availability index built
/// from them.
#[derive(Debug, Clone, Default)]
pub struct MenuSnapshot {
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    products: BTreeMap<ProductId, Product>,
    entries: Vec<MenuEntry>,
    index: AvailabilityIndex,
}

impl MenuSnapshot {
    /// Builds a snapshot, checking that every menu entry points at a known
    /// restaurant and product and that no pair is listed twice.
    pub fn new(
        restaurants: impl IntoIterator<Item = Restaurant>,
        products: impl IntoIterator<Item = Product>,
        entries: Vec<MenuEntry>,
    ) -> Result<Self, DispatchError> {
        let restaurants: BTreeMap<RestaurantId, Restaurant> = restaurants
            .into_iter()
            .map(|restaurant| (restaurant.id, restaurant))
            .collect();
        let products: BTreeMap<ProductId, Product> = products
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !restaurants.contains_key(&entry.restaurant_id) {
                return Err(DispatchError::UnknownRestaurant(entry.restaurant_id));
            }
            if !products.contains_key(&entry.product_id) {
                return Err(DispatchError::UnknownProduct(entry.product_id));
            }
            if !seen.insert((entry.restaurant_id, entry.product_id)) {
                return Err(DispatchError::DuplicateMenuEntry {
                    restaurant_id: entry.restaurant_id,
                    product_id: entry.product_id,
                });
            }
        }

        let index = AvailabilityIndex::build(&entries);
        Ok(Self {
            restaurants,
            products,
            entries,
            index,
        })
    }

    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.get(&id)
    }

    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn contains_product(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn index(&self) -> &AvailabilityIndex {
        &self.index
    }

    /// Products some restaurant currently sells, ascending by id.
    pub fn available_products(&self) -> Vec<&Product> {
        self.index
            .offered_products()
            .into_iter()
            .filter_map(|id| self.products.get(&id))
            .collect()
    }
}
