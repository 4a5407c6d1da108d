use crate::types::ids::{OrderId, ProductId, RestaurantId};
use actix::MailboxError;
use thiserror::Error;

/// Every failure the dispatch backend can report.
///
/// Missing geocoding data and "no restaurant can cook this" are not errors
/// for the ranking core; `NoRestaurantAvailable` only exists for the order
/// intake, which turns an empty candidate set into a rejection.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An order line or menu entry names a product the catalog does not know.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// A menu entry or assignment names a restaurant the catalog does not know.
    #[error("unknown restaurant: {0}")]
    UnknownRestaurant(RestaurantId),

    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),

    /// A restaurant may list a product at most once.
    #[error("duplicate menu entry: restaurant {restaurant_id}, product {product_id}")]
    DuplicateMenuEntry {
        restaurant_id: RestaurantId,
        product_id: ProductId,
    },

    #[error("order has no lines")]
    EmptyOrder,

    #[error("invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: ProductId, quantity: u32 },

    /// A required text field of the order form is blank.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("no restaurant can prepare this order")]
    NoRestaurantAvailable,

    #[error("restaurant {restaurant_id} cannot prepare order {order_id}")]
    RestaurantCannotFulfil {
        order_id: OrderId,
        restaurant_id: RestaurantId,
    },

    #[error("actor mailbox error: {0}")]
    Mailbox(#[from] MailboxError),

    #[error("cannot read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("malformed seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),
}
