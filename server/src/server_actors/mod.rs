pub mod location_registry;
pub mod services;
pub mod storage;
