use crate::types::location::Coordinates;

/// Turns a postal address into coordinates. A failed or empty answer is
/// `None`; retries, if any, are the implementation's business.
pub trait Geocoder {
    fn fetch_coordinates(&self, address: &str) -> Option<Coordinates>;
}
