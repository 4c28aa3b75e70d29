//! Solver configuration preset

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const fn default_max_iterations() -> usize {
    20
}

const fn default_convergence_threshold() -> f64 {
    1.0E-3
}

const fn default_max_gdop() -> Option<f64> {
    None
}

/// Initial point of the Gauss-Newton iteration
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitialGuess {
    /// Start from the geocenter. Every satellite is then seen
    /// from roughly the same distance, which gives a well conditioned
    /// first iteration.
    #[default]
    EarthCenter,
    /// Start from the barycenter of the satellites in sight.
    /// This point lies far above the Earth surface.
    Centroid,
    /// Start from a priori knowledge, expressed as ECEF coordinates in meters.
    Apriori(f64, f64, f64),
}

impl std::fmt::Display for InitialGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EarthCenter => write!(f, "earth-center"),
            Self::Centroid => write!(f, "centroid"),
            Self::Apriori(x, y, z) => write!(f, "apriori({:.3}, {:.3}, {:.3})", x, y, z),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverOpts {
    /// Maximal number of Gauss-Newton iterations per epoch.
    /// Reaching this cap without converging fails the epoch.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
    /// Convergence is declared once the position correction
    /// magnitude drops below this value (meters).
    #[cfg_attr(feature = "serde", serde(default = "default_convergence_threshold"))]
    pub convergence_threshold_m: f64,
    /// Iteration starting point
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_guess: InitialGuess,
    /// GDOP threshold to invalidate the solution
    #[cfg_attr(feature = "serde", serde(default = "default_max_gdop"))]
    pub max_gdop: Option<f64>,
}

impl Default for SolverOpts {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            convergence_threshold_m: default_convergence_threshold(),
            initial_guess: InitialGuess::default(),
            max_gdop: default_max_gdop(),
        }
    }
}
