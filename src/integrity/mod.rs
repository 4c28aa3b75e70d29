//! Signal integrity and spoofing detection
use itertools::Itertools;
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

mod window;

pub use window::{IntegritySample, IntegrityWindow};

use crate::{cfg::IntegrityOpts, prelude::Epoch};

/// Reason why the measurement stream is not trusted
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum IntegrityCause {
    /// Mean CN0 (dB.Hz) below the threshold
    LowCn0(f64),
    /// Doppler spread (Hz) above the threshold
    DopplerSpread(f64),
    /// Displacement (m) between oldest and newest fix above the threshold
    Displacement(f64),
    /// Not enough epochs accumulated, or required signal data missing:
    /// the stream can not be judged yet.
    InsufficientData,
}

impl std::fmt::Display for IntegrityCause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::LowCn0(cn0) => write!(f, "low cn0 ({:.1} dB.Hz)", cn0),
            Self::DopplerSpread(spread) => write!(f, "doppler spread ({:.1} Hz)", spread),
            Self::Displacement(d) => write!(f, "displacement ({:.3} m)", d),
            Self::InsufficientData => write!(f, "insufficient data"),
        }
    }
}

/// [IntegrityVerdict] emitted for one [Epoch]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IntegrityVerdict {
    /// [Epoch] this verdict applies to
    pub epoch: Epoch,
    /// True when the stream should not be trusted
    pub is_suspect: bool,
    /// [IntegrityCause], None when the stream is trusted
    pub reason: Option<IntegrityCause>,
}

impl IntegrityVerdict {
    /// Trusted stream
    pub fn trusted(epoch: Epoch) -> Self {
        Self {
            epoch,
            is_suspect: false,
            reason: None,
        }
    }

    /// Stream that can not be judged: never suspect
    pub fn insufficient_data(epoch: Epoch) -> Self {
        Self {
            epoch,
            is_suspect: false,
            reason: Some(IntegrityCause::InsufficientData),
        }
    }

    /// Suspicious stream
    pub fn suspect(epoch: Epoch, cause: IntegrityCause) -> Self {
        Self {
            epoch,
            is_suspect: true,
            reason: Some(cause),
        }
    }

    /// True when this verdict could not be formed
    pub fn is_unknown(&self) -> bool {
        self.reason == Some(IntegrityCause::InsufficientData)
    }
}

/// [IntegrityMonitor] evaluates an [IntegrityWindow] against
/// independent heuristics. The first triggered heuristic, in order
/// CN0, Doppler spread and displacement, is reported.
#[derive(Debug, Clone, Default)]
pub struct IntegrityMonitor {
    opts: IntegrityOpts,
}

impl IntegrityMonitor {
    /// Builds new [IntegrityMonitor]
    pub fn new(opts: &IntegrityOpts) -> Self {
        Self { opts: opts.clone() }
    }

    /// [IntegrityOpts] currently applied
    pub fn opts(&self) -> &IntegrityOpts {
        &self.opts
    }

    /// Evaluates the [IntegrityWindow], issuing an [IntegrityVerdict] for [Epoch] `t`.
    /// A window that is not full always leads to [IntegrityCause::InsufficientData].
    pub fn evaluate(&self, t: Epoch, window: &IntegrityWindow) -> IntegrityVerdict {
        if window.len() < self.opts.window_size || !window.is_full() {
            debug!("{} - integrity: {}/{} epochs", t, window.len(), self.opts.window_size);
            return IntegrityVerdict::insufficient_data(t);
        }

        let cn0 = window
            .iter()
            .flat_map(|s| s.cn0_dbhz.iter().copied())
            .collect::<Vec<_>>();

        let doppler = window
            .iter()
            .flat_map(|s| s.doppler_hz.iter().copied())
            .collect::<Vec<_>>();

        if self.opts.cn0_threshold_dbhz.is_some() && cn0.is_empty() {
            debug!("{} - integrity: no cn0 reported", t);
            return IntegrityVerdict::insufficient_data(t);
        }

        if self.opts.doppler_spread_threshold_hz.is_some() && doppler.is_empty() {
            debug!("{} - integrity: no doppler reported", t);
            return IntegrityVerdict::insufficient_data(t);
        }

        if let Some(threshold) = self.opts.cn0_threshold_dbhz {
            let mean = cn0.iter().sum::<f64>() / cn0.len() as f64;
            debug!("{} - integrity: mean cn0={:.1}dB.Hz", t, mean);
            if mean < threshold {
                return Self::suspect(t, IntegrityCause::LowCn0(mean));
            }
        }

        if let Some(threshold) = self.opts.doppler_spread_threshold_hz {
            if let Some((min, max)) = doppler.iter().copied().minmax().into_option() {
                let spread = max - min;
                debug!("{} - integrity: doppler spread={:.1}Hz", t, spread);
                if spread > threshold {
                    return Self::suspect(t, IntegrityCause::DopplerSpread(spread));
                }
            }
        }

        if let Some(threshold) = self.opts.displacement_threshold_m {
            if let (Some(oldest), Some(newest)) = (window.oldest(), window.newest()) {
                let displacement = oldest.position.great_circle_distance(&newest.position);
                debug!("{} - integrity: displacement={:.3}m", t, displacement);
                if displacement > threshold {
                    return Self::suspect(t, IntegrityCause::Displacement(displacement));
                }
            }
        }

        IntegrityVerdict::trusted(t)
    }

    fn suspect(t: Epoch, cause: IntegrityCause) -> IntegrityVerdict {
        warn!("{} - suspicious measurement stream: {}", t, cause);
        IntegrityVerdict::suspect(t, cause)
    }
}
