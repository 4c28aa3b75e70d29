//! Integrity monitor configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const fn default_window_size() -> usize {
    5
}

const fn default_cn0_threshold() -> Option<f64> {
    Some(30.0)
}

const fn default_doppler_spread_threshold() -> Option<f64> {
    Some(1000.0)
}

const fn default_displacement_threshold() -> Option<f64> {
    Some(100.0)
}

/// Integrity heuristics. Each threshold may be disabled
/// individually by setting it to None.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntegrityOpts {
    /// Number of accepted epochs the verdict is built upon.
    #[cfg_attr(feature = "serde", serde(default = "default_window_size"))]
    pub window_size: usize,
    /// Mean CN0 (dB.Hz) below which the stream is suspect.
    #[cfg_attr(feature = "serde", serde(default = "default_cn0_threshold"))]
    pub cn0_threshold_dbhz: Option<f64>,
    /// Doppler spread (Hz) above which the stream is suspect.
    #[cfg_attr(feature = "serde", serde(default = "default_doppler_spread_threshold"))]
    pub doppler_spread_threshold_hz: Option<f64>,
    /// Displacement between oldest and newest fix (meters)
    /// above which the stream is suspect.
    #[cfg_attr(feature = "serde", serde(default = "default_displacement_threshold"))]
    pub displacement_threshold_m: Option<f64>,
}

impl Default for IntegrityOpts {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            cn0_threshold_dbhz: default_cn0_threshold(),
            doppler_spread_threshold_hz: default_doppler_spread_threshold(),
            displacement_threshold_m: default_displacement_threshold(),
        }
    }
}
