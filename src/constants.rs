/// Speed of light in m.s⁻¹
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Mean Earth radius (spherical model), in meters.
/// Used by great circle distances.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Minimal number of measurements to resolve 3D position + clock bias
pub const MIN_MEASUREMENTS: usize = 4;

/// WGS84 Ellipsoid semi-major axis (meters)
pub const EARTH_SEMI_MAJOR_AXIS_WGS84: f64 = 6_378_137.0;

/// WGS84 Ellipsoid flattening
pub const EARTH_FLATTENING_WGS84: f64 = 1.0 / 298.257_223_563;
