use crate::types::catalog::MenuEntry;
use crate::types::ids::{ProductId, RestaurantId};
use std::collections::{BTreeSet, HashMap};

/// Restaurants able to cook each product, built from the available menu
/// entries in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    restaurants_by_product: HashMap<ProductId, BTreeSet<RestaurantId>>,
}

impl AvailabilityIndex {
    pub fn build<'a>(entries: impl IntoIterator<Item = &'a MenuEntry>) -> Self {
        let mut restaurants_by_product: HashMap<ProductId, BTreeSet<RestaurantId>> =
            HashMap::new();
        for entry in entries.into_iter().filter(|entry| entry.is_available) {
            restaurants_by_product
                .entry(entry.product_id)
                .or_default()
                .insert(entry.restaurant_id);
        }
        Self {
            restaurants_by_product,
        }
    }

    /// Restaurants currently offering `product_id`, if any.
    pub fn restaurants_for(&self, product_id: ProductId) -> Option<&BTreeSet<RestaurantId>> {
        self.restaurants_by_product
            .get(&product_id)
            .filter(|restaurants| !restaurants.is_empty())
    }

    /// Products that at least one restaurant offers.
    pub fn offered_products(&self) -> BTreeSet<ProductId> {
        self.restaurants_by_product.keys().copied().collect()
    }

    /// Restaurants offering every one of `product_ids`.
    ///
    /// Duplicate ids are ignored. An empty list yields no restaurants, and
    /// so does any product nobody offers.
    pub fn restaurants_serving_all(&self, product_ids: &[ProductId]) -> BTreeSet<RestaurantId> {
        let distinct: BTreeSet<ProductId> = product_ids.iter().copied().collect();

        let mut per_product = Vec::with_capacity(distinct.len());
        for product_id in distinct {
            match self.restaurants_for(product_id) {
                Some(restaurants) => per_product.push(restaurants),
                None => return BTreeSet::new(),
            }
        }
        // Intersect starting from the smallest set.
        per_product.sort_by_key(|restaurants| restaurants.len());

        let mut sets = per_product.into_iter();
        let Some(first) = sets.next() else {
            return BTreeSet::new();
        };
        let mut result = first.clone();
        for restaurants in sets {
            result.retain(|restaurant_id| restaurants.contains(restaurant_id));
            if result.is_empty() {
                break;
            }
        }
        result
    }
}

/// Restaurants whose available menu covers every product of an order.
pub fn resolve_available_restaurants(
    product_ids: &[ProductId],
    menu_entries: &[MenuEntry],
) -> BTreeSet<RestaurantId> {
    AvailabilityIndex::build(menu_entries).restaurants_serving_all(product_ids)
}
