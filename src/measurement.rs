//! Raw ranging measurements
use crate::prelude::{Constellation, Epoch, Vector3, SV};

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Converts an Android `GnssStatus` constellation type code
/// to [Constellation]. Unknown codes return None.
pub fn constellation_from_android_code(code: u8) -> Option<Constellation> {
    match code {
        1 => Some(Constellation::GPS),
        2 => Some(Constellation::SBAS),
        3 => Some(Constellation::Glonass),
        4 => Some(Constellation::QZSS),
        5 => Some(Constellation::BeiDou),
        6 => Some(Constellation::Galileo),
        7 => Some(Constellation::IRNSS),
        _ => None,
    }
}

/// Satellite [Measurement] sampled at a given [Epoch].
/// Immutable once ingested.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Measurement {
    /// [SV] (identity and constellation)
    pub sv: SV,
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Satellite position (ECEF, meters)
    pub sv_position_m: Vector3<f64>,
    /// Pseudo range (meters)
    pub pseudo_range_m: f64,
    /// Carrier to noise density ratio (dB.Hz), when reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cn0_dbhz: Option<f64>,
    /// Doppler shift (Hz), when reported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub doppler_hz: Option<f64>,
}

impl Measurement {
    /// Builds new [Measurement] without signal quality information
    pub fn new(sv: SV, epoch: Epoch, sv_position_m: Vector3<f64>, pseudo_range_m: f64) -> Self {
        Self {
            sv,
            epoch,
            sv_position_m,
            pseudo_range_m,
            cn0_dbhz: None,
            doppler_hz: None,
        }
    }

    /// Copies and returns [Measurement] with CN0 (dB.Hz)
    pub fn with_cn0(&self, cn0_dbhz: f64) -> Self {
        let mut s = self.clone();
        s.cn0_dbhz = Some(cn0_dbhz);
        s
    }

    /// Copies and returns [Measurement] with Doppler shift (Hz)
    pub fn with_doppler(&self, doppler_hz: f64) -> Self {
        let mut s = self.clone();
        s.doppler_hz = Some(doppler_hz);
        s
    }

    pub(crate) fn constellation(&self) -> Constellation {
        self.sv.constellation
    }

    pub(crate) fn valid_pseudo_range(&self) -> bool {
        self.pseudo_range_m.is_finite() && self.pseudo_range_m > 0.0
    }
}
