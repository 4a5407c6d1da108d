/// Mean Earth radius in kilometres, used by the great-circle distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;
/// Number of decimals kept when reporting a distance in kilometres.
pub const DISTANCE_DECIMALS: i32 = 1;

/// When this variable is set, loggers also print debug lines.
pub const DEBUG_ENV_VAR: &str = "DISPATCH_DEBUG";
