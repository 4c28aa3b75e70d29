#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::Constellation;

mod integrity;
mod solver;

pub use integrity::IntegrityOpts;
pub use solver::{InitialGuess, SolverOpts};

/// Measurements selection, applied prior any navigation attempt.
#[derive(Default, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrefilterOpts {
    /// Minimal CN0 (dB.Hz). Measurements that do not
    /// carry a CN0 value are not subject to this mask.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_cn0_dbhz: Option<f64>,
    /// Only retain these constellations, when defined.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constellations: Option<Vec<Constellation>>,
}

/// [Session] and [Solver] configuration
#[derive(Default, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Navigation solver options
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverOpts,
    /// Integrity monitor options
    #[cfg_attr(feature = "serde", serde(default))]
    pub integrity: IntegrityOpts,
    /// Measurements pre-fit selection
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefilter: PrefilterOpts,
}

impl Config {
    /// Returns [Config] with desired Gauss-Newton iteration cap
    pub fn with_max_iterations(&self, max_iterations: usize) -> Self {
        let mut s = self.clone();
        s.solver.max_iterations = max_iterations;
        s
    }

    /// Returns [Config] with desired [InitialGuess]
    pub fn with_initial_guess(&self, initial_guess: InitialGuess) -> Self {
        let mut s = self.clone();
        s.solver.initial_guess = initial_guess;
        s
    }

    /// Returns [Config] with GDOP limit
    pub fn with_max_gdop(&self, max_gdop: f64) -> Self {
        let mut s = self.clone();
        s.solver.max_gdop = Some(max_gdop);
        s
    }

    /// Returns [Config] with desired integrity window size
    pub fn with_window_size(&self, window_size: usize) -> Self {
        let mut s = self.clone();
        s.integrity.window_size = window_size;
        s
    }

    /// Returns [Config] with desired [IntegrityOpts]
    pub fn with_integrity(&self, integrity: IntegrityOpts) -> Self {
        let mut s = self.clone();
        s.integrity = integrity;
        s
    }

    /// Returns [Config] with minimal CN0 mask, applied to the measurements
    pub fn with_min_cn0(&self, min_cn0_dbhz: f64) -> Self {
        let mut s = self.clone();
        s.prefilter.min_cn0_dbhz = Some(min_cn0_dbhz);
        s
    }

    /// Returns [Config] that only retains following [Constellation]s
    pub fn with_constellations(&self, constellations: &[Constellation]) -> Self {
        let mut s = self.clone();
        s.prefilter.constellations = Some(constellations.to_vec());
        s
    }
}
