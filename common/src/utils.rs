use crate::constants::{DISTANCE_DECIMALS, EARTH_RADIUS_KM};
use crate::types::location::Coordinates;
use rand::random;

/// Great-circle distance between two points, in kilometres (haversine).
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let half_dlat = (to.latitude - from.latitude).to_radians() / 2.0;
    let half_dlon = (to.longitude - from.longitude).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Rounds a distance to `DISTANCE_DECIMALS` places, halves away from zero.
pub fn round_distance(km: f64) -> f64 {
    let factor = 10f64.powi(DISTANCE_DECIMALS);
    (km * factor).round() / factor
}

pub fn random_bool_by_given_probability(probability: f32) -> bool {
    let rand_value: f32 = random();
    rand_value < probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::assert_about_eq;

    fn point(longitude: f64, latitude: f64) -> Coordinates {
        Coordinates {
            longitude,
            latitude,
        }
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let p = point(37.6176, 55.7558);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_haversine_tenth_of_a_degree_of_latitude() {
        let km = haversine_km(point(10.0, 10.0), point(10.0, 10.1));
        assert_about_eq!(km, 11.1195, 1e-3);
    }

    #[test]
    fn test_haversine_moscow_to_saint_petersburg() {
        let moscow = point(37.6176, 55.7558);
        let spb = point(30.3141, 59.9386);
        let km = haversine_km(moscow, spb);
        assert!((630.0..640.0).contains(&km), "got {km}");
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = point(-73.9857, 40.7484);
        let b = point(-0.1276, 51.5072);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn test_round_distance_keeps_one_decimal() {
        assert_eq!(round_distance(11.1195), 11.1);
        assert_eq!(round_distance(0.04), 0.0);
        assert_eq!(round_distance(2.96), 3.0);
    }

    #[test]
    fn test_round_distance_halves_go_up() {
        assert_eq!(round_distance(0.25), 0.3);
        assert_eq!(round_distance(1.75), 1.8);
    }

    #[test]
    fn test_random_bool_extremes() {
        assert!(!random_bool_by_given_probability(0.0));
        assert!(random_bool_by_given_probability(1.1));
    }
}
