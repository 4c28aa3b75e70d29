//! Cartesian (ECEF) and geodetic coordinates
use map_3d::{deg2rad, geodetic2ecef, rad2deg, Ellipsoid};

use crate::{
    constants::{EARTH_FLATTENING_WGS84, EARTH_MEAN_RADIUS_M, EARTH_SEMI_MAJOR_AXIS_WGS84},
    prelude::Vector3,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Bowring iterations cap
const MAX_BOWRING_ITERATIONS: usize = 16;

/// Converts ECEF coordinates (m) to geodetic latitude, longitude (rad)
/// and altitude above the WGS84 ellipsoid (m), by iterating Bowring's
/// parametric latitude. Remains accurate far above the surface.
fn ecef2geodetic(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let a = EARTH_SEMI_MAJOR_AXIS_WGS84;
    let f = EARTH_FLATTENING_WGS84;
    let b = a * (1.0 - f);
    let e2 = f * (2.0 - f);
    let ep2 = (a * a - b * b) / (b * b);

    let p = x.hypot(y);
    let lon = y.atan2(x);

    let latitude = |beta: f64| {
        let (sin_beta, cos_beta) = beta.sin_cos();
        (z + ep2 * b * sin_beta.powi(3)).atan2(p - e2 * a * cos_beta.powi(3))
    };

    let mut beta = z.atan2(p * (1.0 - f));
    for _ in 0..MAX_BOWRING_ITERATIONS {
        let lat = latitude(beta);
        let next = ((1.0 - f) * lat.sin()).atan2(lat.cos());
        let converged = (next - beta).abs() < 1.0E-15;
        beta = next;
        if converged {
            break;
        }
    }

    let lat = latitude(beta);
    let (sin_lat, cos_lat) = lat.sin_cos();
    let alt = p * cos_lat + z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();
    (lat, lon, alt)
}

/// [Position] expressed both in ECEF and geodetic coordinates,
/// on the WGS84 ellipsoid.
///
/// The geocenter (0, 0, 0) has no geodetic representation:
/// the returned latitude and altitude are meaningless there.
/// This is not handled specifically.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Position {
    /// ECEF coordinates in meters
    pub(crate) ecef: Vector3<f64>,
    /// Latitude, longitude [ddeg] and altitude above ellipsoid [m]
    pub(crate) geodetic: Vector3<f64>,
}

impl Position {
    /// Builds new [Position] from ECEF coordinates expressed in meters.
    pub fn from_ecef(ecef: Vector3<f64>) -> Self {
        let (lat_rad, lon_rad, alt_m) = ecef2geodetic(ecef[0], ecef[1], ecef[2]);
        Self {
            ecef,
            geodetic: Vector3::new(rad2deg(lat_rad), rad2deg(lon_rad), alt_m),
        }
    }

    /// Builds new [Position] from geodetic coordinates
    /// - latitude [ddeg]
    /// - longitude [ddeg]
    /// - altitude above ellipsoid [m]
    pub fn from_geodetic(lat_ddeg: f64, lon_ddeg: f64, alt_m: f64) -> Self {
        let (x, y, z) = geodetic2ecef(
            deg2rad(lat_ddeg),
            deg2rad(lon_ddeg),
            alt_m,
            Ellipsoid::WGS84,
        );
        Self {
            ecef: Vector3::new(x, y, z),
            geodetic: Vector3::new(lat_ddeg, lon_ddeg, alt_m),
        }
    }

    /// Returns ECEF coordinates in meters.
    pub fn ecef(&self) -> Vector3<f64> {
        self.ecef
    }

    /// Returns (latitude [ddeg], longitude [ddeg], altitude [m])
    pub fn lat_lon_alt(&self) -> (f64, f64, f64) {
        (self.geodetic[0], self.geodetic[1], self.geodetic[2])
    }

    /// Great circle distance to other [Position], in meters.
    /// Altitude is disregarded.
    pub fn great_circle_distance(&self, rhs: &Self) -> f64 {
        haversine_m(self.geodetic[0], self.geodetic[1], rhs.geodetic[0], rhs.geodetic[1])
    }
}

/// Haversine distance (meters) between two points on a spherical Earth,
/// coordinates expressed in decimal degrees.
pub fn haversine_m(lat1_ddeg: f64, lon1_ddeg: f64, lat2_ddeg: f64, lon2_ddeg: f64) -> f64 {
    let (lat1, lat2) = (deg2rad(lat1_ddeg), deg2rad(lat2_ddeg));
    let dlat = deg2rad(lat2_ddeg - lat1_ddeg);
    let dlon = deg2rad(lon2_ddeg - lon1_ddeg);

    // rounding may exceed 1 for antipodal points
    let a = ((dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2))
        .min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_MEAN_RADIUS_M * c
}

#[cfg(test)]
mod test {
    use super::haversine_m;

    #[test]
    fn haversine_same_point() {
        assert_eq!(haversine_m(32.2871859, 35.0780891, 32.2871859, 35.0780891), 0.0);
    }

    #[test]
    fn haversine_one_degree_meridian() {
        // one degree of arc on the mean sphere
        let d = haversine_m(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111_194.93).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn haversine_antipodal() {
        let half_circumference = std::f64::consts::PI * 6_371_000.0;
        for (lat1, lon1, lat2, lon2) in [
            (0.0, 0.0, 0.0, 180.0),
            (45.0, 0.0, -45.0, 180.0),
            (32.2871859, 35.0780891, -32.2871859, -144.9219109),
        ] {
            let d = haversine_m(lat1, lon1, lat2, lon2);
            assert!(d.is_finite());
            assert!((d - half_circumference).abs() < 1.0, "got {}", d);
        }
    }
}
