use hifitime::Unit;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::SPEED_OF_LIGHT_M_S,
    navigation::DilutionOfPrecision,
    prelude::{Duration, Epoch, Position, Vector3},
};

/// [PositionEstimate] resolved for a single [Epoch].
/// Never modified once formed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PositionEstimate {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Receiver [Position]
    pub position: Position,
    /// Receiver clock bias, expressed in meters of range
    pub clock_bias_m: f64,
    /// Number of Gauss-Newton iterations that were needed
    pub iterations: usize,
    /// [DilutionOfPrecision] of this solution
    pub dop: DilutionOfPrecision,
}

impl PositionEstimate {
    /// Receiver ECEF coordinates in meters
    pub fn ecef(&self) -> Vector3<f64> {
        self.position.ecef()
    }

    /// Latitude in decimal degrees
    pub fn latitude_ddeg(&self) -> f64 {
        self.position.lat_lon_alt().0
    }

    /// Longitude in decimal degrees
    pub fn longitude_ddeg(&self) -> f64 {
        self.position.lat_lon_alt().1
    }

    /// Altitude above the ellipsoid in meters
    pub fn altitude_m(&self) -> f64 {
        self.position.lat_lon_alt().2
    }

    /// Receiver clock offset to system time, as [Duration]
    pub fn clock_offset(&self) -> Duration {
        (self.clock_bias_m / SPEED_OF_LIGHT_M_S) * Unit::Second
    }
}
