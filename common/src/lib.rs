pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod geocoding;
pub mod logger;
pub mod types;
pub mod utils;
