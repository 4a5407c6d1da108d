//! Restaurant availability and distance ranking for orders.
//!
//! Everything here is a pure function over explicit snapshots: the menu
//! ([`MenuSnapshot`]) and the cached locations ([`LocationLookup`]).

pub mod availability;
pub mod locations;
pub mod pipeline;
pub mod ranking;
pub mod snapshot;

pub use availability::{AvailabilityIndex, resolve_available_restaurants};
pub use locations::{LocationLookup, LocationSnapshot};
pub use pipeline::{available_restaurants_for_products, get_ranked_restaurants_for_order};
pub use ranking::{RankedRestaurant, distance_between, rank_by_distance};
pub use snapshot::MenuSnapshot;
