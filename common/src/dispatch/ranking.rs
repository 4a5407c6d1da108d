use crate::dispatch::locations::LocationLookup;
use crate::types::catalog::Restaurant;
use crate::types::location::Coordinates;
use crate::utils::{haversine_km, round_distance};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A restaurant able to cook an order and its distance to the customer.
///
/// `distance_km` is `None` when either address has no known location; that
/// is not the same as `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRestaurant {
    pub restaurant: Restaurant,
    pub distance_km: Option<f64>,
}

impl RankedRestaurant {
    pub fn is_resolved(&self) -> bool {
        self.distance_km.is_some()
    }

    fn sort_key(&self) -> (bool, f64) {
        (self.distance_km.is_none(), self.distance_km.unwrap_or(0.0))
    }

    fn cmp_by_distance(&self, other: &Self) -> Ordering {
        let (self_unresolved, self_km) = self.sort_key();
        let (other_unresolved, other_km) = other.sort_key();
        self_unresolved
            .cmp(&other_unresolved)
            .then_with(|| self_km.total_cmp(&other_km))
    }
}

impl fmt::Display for RankedRestaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance_km {
            Some(km) => write!(f, "{} - {:.1} km", self.restaurant.name, km),
            None => write!(f, "{} - distance unknown", self.restaurant.name),
        }
    }
}

/// Distance in kilometres rounded to one decimal.
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    round_distance(haversine_km(from, to))
}

/// Orders `restaurants` by distance to `delivery_address`, closest first.
///
/// Restaurants whose distance cannot be computed go last. The sort is
/// stable: restaurants at the same distance keep the order they came in.
pub fn rank_by_distance<'a, L>(
    restaurants: impl IntoIterator<Item = &'a Restaurant>,
    delivery_address: &str,
    lookup: &L,
) -> Vec<RankedRestaurant>
where
    L: LocationLookup + ?Sized,
{
    let delivery = lookup.coordinates(delivery_address);

    let mut ranked: Vec<RankedRestaurant> = restaurants
        .into_iter()
        .map(|restaurant| {
            let distance_km = match (lookup.coordinates(&restaurant.address), delivery) {
                (Some(from), Some(to)) => Some(distance_between(from, to)),
                _ => None,
            };
            RankedRestaurant {
                restaurant: restaurant.clone(),
                distance_km,
            }
        })
        .collect();

    ranked.sort_by(RankedRestaurant::cmp_by_distance);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn restaurant(id: u64, address: &str) -> Restaurant {
        Restaurant {
            id,
            name: format!("R{id}"),
            address: address.to_string(),
            contact_phone: String::new(),
        }
    }

    fn lookup(points: &[(&str, f64, f64)]) -> HashMap<String, Coordinates> {
        points
            .iter()
            .map(|(address, lon, lat)| (address.to_string(), Coordinates::new(*lon, *lat)))
            .collect()
    }

    fn ids(ranked: &[RankedRestaurant]) -> Vec<u64> {
        ranked.iter().map(|r| r.restaurant.id).collect()
    }

    #[test]
    fn test_closest_restaurant_comes_first() {
        let restaurants = vec![
            restaurant(1, "far"),
            restaurant(2, "near"),
            restaurant(3, "middle"),
        ];
        let locations = lookup(&[
            ("home", 10.0, 10.0),
            ("far", 10.0, 11.0),
            ("near", 10.0, 10.05),
            ("middle", 10.0, 10.3),
        ]);
        let ranked = rank_by_distance(&restaurants, "home", &locations);
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
        assert_eq!(ranked[0].distance_km, Some(5.6));
    }

    #[test]
    fn test_unresolved_restaurant_goes_last() {
        let restaurants = vec![restaurant(1, "nowhere"), restaurant(2, "near")];
        let locations = lookup(&[("home", 10.0, 10.0), ("near", 10.0, 10.1)]);
        let ranked = rank_by_distance(&restaurants, "home", &locations);
        assert_eq!(ids(&ranked), vec![2, 1]);
        assert_eq!(ranked[0].distance_km, Some(11.1));
        assert_eq!(ranked[1].distance_km, None);
    }

    #[test]
    fn test_unresolved_delivery_address_leaves_every_distance_unknown() {
        let restaurants = vec![restaurant(1, "a"), restaurant(2, "b")];
        let locations = lookup(&[("a", 1.0, 1.0), ("b", 2.0, 2.0)]);
        let ranked = rank_by_distance(&restaurants, "home", &locations);
        assert!(ranked.iter().all(|r| !r.is_resolved()));
        assert_eq!(ids(&ranked), vec![1, 2]);
    }

    #[test]
    fn test_zero_distance_is_not_unresolved() {
        let restaurants = vec![restaurant(1, "unknown"), restaurant(2, "home")];
        let locations = lookup(&[("home", 30.0, 60.0)]);
        let ranked = rank_by_distance(&restaurants, "home", &locations);
        assert_eq!(ranked[0].distance_km, Some(0.0));
        assert_eq!(ranked[1].distance_km, None);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let restaurants = vec![
            restaurant(4, "x"),
            restaurant(1, "same"),
            restaurant(3, "also-same"),
        ];
        let locations = lookup(&[
            ("home", 10.0, 10.0),
            ("same", 10.0, 10.0),
            ("also-same", 10.0, 10.0),
        ]);
        let ranked = rank_by_distance(&restaurants, "home", &locations);
        assert_eq!(ids(&ranked), vec![1, 3, 4]);
        assert_eq!(ranked[0].distance_km, Some(0.0));
        assert_eq!(ranked[1].distance_km, Some(0.0));
    }

    #[test]
    fn test_restaurants_sharing_an_address_share_a_distance() {
        let restaurants = vec![restaurant(1, "mall"), restaurant(2, "mall")];
        let locations = lookup(&[("home", 37.6, 55.7), ("mall", 37.7, 55.8)]);
        let ranked = rank_by_distance(&restaurants, "home", &locations);
        assert_eq!(ranked[0].distance_km, ranked[1].distance_km);
    }

    #[test]
    fn test_no_restaurants_ranks_nothing() {
        let locations = lookup(&[("home", 0.0, 0.0)]);
        let none: Vec<Restaurant> = Vec::new();
        assert!(rank_by_distance(&none, "home", &locations).is_empty());
    }

    #[test]
    fn test_display_shows_unit_or_unknown() {
        let resolved = RankedRestaurant {
            restaurant: restaurant(1, "a"),
            distance_km: Some(3.0),
        };
        let unresolved = RankedRestaurant {
            restaurant: restaurant(2, "b"),
            distance_km: None,
        };
        assert_eq!(resolved.to_string(), "R1 - 3.0 km");
        assert_eq!(unresolved.to_string(), "R2 - distance unknown");
    }
}
