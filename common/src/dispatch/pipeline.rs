use crate::dispatch::locations::LocationLookup;
use crate::dispatch::ranking::{RankedRestaurant, rank_by_distance};
use crate::dispatch::snapshot::MenuSnapshot;
use crate::errors::DispatchError;
use crate::types::ids::{ProductId, RestaurantId};
use crate::types::order::Order;
use std::collections::BTreeSet;

/// Restaurants able to cook every product in `product_ids`.
///
/// Fails with `UnknownProduct` when a product is missing from the catalog.
/// An empty set is a valid answer: nobody can cook this combination.
pub fn available_restaurants_for_products(
    product_ids: &[ProductId],
    menu: &MenuSnapshot,
) -> Result<BTreeSet<RestaurantId>, DispatchError> {
    if let Some(unknown) = product_ids.iter().find(|id| !menu.contains_product(**id)) {
        return Err(DispatchError::UnknownProduct(*unknown));
    }
    Ok(menu.index().restaurants_serving_all(product_ids))
}

/// Restaurants able to cook `order`, closest to its delivery address first.
///
/// Candidates with the same distance are listed by ascending restaurant id,
/// candidates with an unknown distance go last.
pub fn get_ranked_restaurants_for_order<L>(
    order: &Order,
    menu: &MenuSnapshot,
    lookup: &L,
) -> Result<Vec<RankedRestaurant>, DispatchError>
where
    L: LocationLookup + ?Sized,
{
    let candidates = available_restaurants_for_products(&order.product_ids(), menu)?;
    if candidates.is_empty() {
        return Ok(Vec::new());
    }
    let restaurants = candidates
        .into_iter()
        .filter_map(|restaurant_id| menu.restaurant(restaurant_id));
    Ok(rank_by_distance(restaurants, &order.address, lookup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::{MenuEntry, Product, Restaurant};
    use crate::types::location::Coordinates;
    use crate::types::order::OrderLine;
    use crate::types::order_status::OrderStatus;
    use chrono::Local;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn restaurant(id: RestaurantId) -> Restaurant {
        Restaurant {
            id,
            name: format!("R{id}"),
            address: format!("restaurant-{id}"),
            contact_phone: String::new(),
        }
    }

    fn product(id: ProductId) -> Product {
        Product {
            id,
            name: format!("P{id}"),
            price: Decimal::new(250, 0),
            category: None,
            special_status: false,
            description: String::new(),
        }
    }

    fn order(products: &[ProductId]) -> Order {
        Order {
            id: 1,
            firstname: "Anna".to_string(),
            lastname: "Ivanova".to_string(),
            phonenumber: "+79990001122".to_string(),
            address: "home".to_string(),
            status: OrderStatus::Processing,
            payment_type: None,
            comment: String::new(),
            processing_restaurant: None,
            lines: products
                .iter()
                .map(|product_id| OrderLine {
                    product_id: *product_id,
                    quantity: 1,
                    product_price: Decimal::new(250, 0),
                })
                .collect(),
            created_at: Local::now(),
        }
    }

    fn menu(entries: Vec<MenuEntry>) -> MenuSnapshot {
        MenuSnapshot::new(
            vec![restaurant(1), restaurant(2), restaurant(3)],
            (1..=9).map(product),
            entries,
        )
        .unwrap()
    }

    fn locations(points: &[(&str, f64, f64)]) -> HashMap<String, Coordinates> {
        points
            .iter()
            .map(|(address, lon, lat)| (address.to_string(), Coordinates::new(*lon, *lat)))
            .collect()
    }

    #[test]
    fn test_only_restaurant_with_every_product_is_candidate() {
        let menu = menu(vec![
            MenuEntry::available(1, 1),
            MenuEntry::available(1, 2),
            MenuEntry::available(2, 1),
        ]);
        let result = available_restaurants_for_products(&[1, 2], &menu).unwrap();
        assert_eq!(result, BTreeSet::from([1]));
    }

    #[test]
    fn test_unresolved_restaurant_is_ranked_after_resolved_one() {
        let menu = menu(vec![MenuEntry::available(1, 1), MenuEntry::available(2, 1)]);
        let lookup = locations(&[("home", 10.0, 10.0), ("restaurant-1", 10.0, 10.1)]);

        let ranked = get_ranked_restaurants_for_order(&order(&[1]), &menu, &lookup).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].restaurant.id, 1);
        assert_eq!(ranked[0].distance_km, Some(11.1));
        assert_eq!(ranked[1].restaurant.id, 2);
        assert_eq!(ranked[1].distance_km, None);
    }

    #[test]
    fn test_product_nobody_sells_yields_empty_ranking() {
        let menu = menu(vec![MenuEntry::available(1, 1)]);
        let lookup = locations(&[("home", 10.0, 10.0)]);
        let ranked = get_ranked_restaurants_for_order(&order(&[9]), &menu, &lookup).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_equidistant_restaurants_precede_unresolved_in_id_order() {
        let menu = menu(vec![
            MenuEntry::available(3, 1),
            MenuEntry::available(2, 1),
            MenuEntry::available(1, 1),
        ]);
        let lookup = locations(&[
            ("home", 10.0, 10.0),
            ("restaurant-2", 10.0, 10.0),
            ("restaurant-3", 10.0, 10.0),
        ]);

        let ranked = get_ranked_restaurants_for_order(&order(&[1]), &menu, &lookup).unwrap();

        let summary: Vec<(RestaurantId, Option<f64>)> = ranked
            .iter()
            .map(|r| (r.restaurant.id, r.distance_km))
            .collect();
        assert_eq!(summary, vec![(2, Some(0.0)), (3, Some(0.0)), (1, None)]);
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let menu = menu(vec![MenuEntry::available(1, 1)]);
        let lookup = locations(&[]);
        let result = get_ranked_restaurants_for_order(&order(&[1, 42]), &menu, &lookup);
        assert!(matches!(result, Err(DispatchError::UnknownProduct(42))));
    }

    #[test]
    fn test_duplicate_lines_rank_like_single_line() {
        let menu = menu(vec![MenuEntry::available(1, 1), MenuEntry::available(2, 1)]);
        let lookup = locations(&[("home", 10.0, 10.0), ("restaurant-2", 10.0, 10.2)]);
        let single = get_ranked_restaurants_for_order(&order(&[1]), &menu, &lookup).unwrap();
        let repeated = get_ranked_restaurants_for_order(&order(&[1, 1, 1]), &menu, &lookup).unwrap();
        assert_eq!(single, repeated);
    }

    #[test]
    fn test_ranking_twice_gives_same_result() {
        let menu = menu(vec![
            MenuEntry::available(1, 1),
            MenuEntry::available(2, 1),
            MenuEntry::available(3, 1),
        ]);
        let lookup = locations(&[
            ("home", 37.6, 55.7),
            ("restaurant-1", 37.7, 55.8),
            ("restaurant-3", 37.5, 55.6),
        ]);
        let first = get_ranked_restaurants_for_order(&order(&[1]), &menu, &lookup).unwrap();
        let second = get_ranked_restaurants_for_order(&order(&[1]), &menu, &lookup).unwrap();
        assert_eq!(first, second);
    }
}
