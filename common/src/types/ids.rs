pub type ProductId = u64;
pub type RestaurantId = u64;
pub type OrderId = u64;
