//! Gauss-Newton pseudo range trilateration
use itertools::Itertools;
use log::debug;
use nalgebra::{DVector, Matrix4, MatrixXx4, Vector4};

mod dop;
mod estimate;

pub use dop::DilutionOfPrecision;
pub use estimate::PositionEstimate;

use crate::{
    cfg::SolverOpts,
    constants::MIN_MEASUREMENTS,
    prelude::{Epoch, Error, Position, Vector3},
};

/// Above this condition number, (Hᵀ.H) is considered singular.
const MAX_CONDITION_NUMBER: f64 = 1.0E12;

/// Navigation state: receiver position and clock bias
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct State {
    /// ECEF position (meters)
    pub position: Vector3<f64>,
    /// Clock bias (meters)
    pub clock_bias_m: f64,
}

impl State {
    /// Update [State]
    pub fn update(&mut self, dx: &Vector4<f64>) {
        self.position[0] += dx[0];
        self.position[1] += dx[1];
        self.position[2] += dx[2];
        self.clock_bias_m += dx[3];
    }
}

/// Linearized navigation system, formed around current [State]
#[derive(Debug, Clone)]
pub(crate) struct Navigation {
    /// Design matrix
    h: MatrixXx4<f64>,
    /// Residuals: measured - predicted
    b: DVector<f64>,
}

impl Navigation {
    /// Linearizes the pseudo range model around provided [State].
    pub fn new(
        state: &State,
        sv_positions: &[Vector3<f64>],
        pseudo_ranges: &[f64],
    ) -> Result<Self, Error> {
        let size = sv_positions.len();

        let mut b = DVector::<f64>::zeros(size);
        let mut h = MatrixXx4::<f64>::zeros(size);

        for (i, (sv_position, pr)) in sv_positions.iter().zip(pseudo_ranges.iter()).enumerate() {
            let los = sv_position - state.position;
            let rho = los.norm();

            if !(rho > 0.0) || !rho.is_finite() {
                return Err(Error::UnsolvableGeometry);
            }

            h[(i, 0)] = -los[0] / rho;
            h[(i, 1)] = -los[1] / rho;
            h[(i, 2)] = -los[2] / rho;
            h[(i, 3)] = 1.0;

            b[i] = pr - (rho + state.clock_bias_m);
        }

        Ok(Self { h, b })
    }

    /// Returns (Hᵀ.H)⁻¹, when the geometry permits.
    pub fn q_matrix(&self) -> Result<Matrix4<f64>, Error> {
        let ht_h: Matrix4<f64> = self.h.transpose() * &self.h;

        let (min, max) = ht_h
            .symmetric_eigenvalues()
            .iter()
            .copied()
            .minmax()
            .into_option()
            .ok_or(Error::UnsolvableGeometry)?;

        if !(min > 0.0) || max / min > MAX_CONDITION_NUMBER {
            debug!("ill conditioned geometry: eigenvalues [{:.3E}; {:.3E}]", min, max);
            return Err(Error::UnsolvableGeometry);
        }

        ht_h.try_inverse().ok_or(Error::UnsolvableGeometry)
    }

    /// Solves the normal equations, returns the [State] correction
    pub fn correction(&self, q: &Matrix4<f64>) -> Result<Vector4<f64>, Error> {
        let ht_b: Vector4<f64> = self.h.transpose() * &self.b;
        let dx = q * ht_b;

        if dx.iter().all(|v| v.is_finite()) {
            Ok(dx)
        } else {
            Err(Error::UnsolvableGeometry)
        }
    }
}

/// Resolves receiver position and clock bias from a set of satellite
/// positions and their pseudo ranges, by Gauss-Newton iterative least squares.
///
/// ## Inputs
/// - t: sampling [Epoch]
/// - sv_positions: satellite ECEF positions (m)
/// - pseudo_ranges: pseudo ranges (m), paired with `sv_positions`
/// - initial_position: ECEF iteration starting point (m)
/// - initial_clock_bias_m: clock bias starting point (m)
/// - opts: [SolverOpts] (iteration cap, convergence threshold)
///
/// ## Returns
/// - [PositionEstimate] once the position correction magnitude
///   drops below the convergence threshold
/// - [Error::InsufficientMeasurements] with less than 4 measurements
/// - [Error::UnsolvableGeometry] on singular normal equations
/// - [Error::DidNotConverge] once the iteration cap is reached
pub fn trilaterate(
    t: Epoch,
    sv_positions: &[Vector3<f64>],
    pseudo_ranges: &[f64],
    initial_position: Vector3<f64>,
    initial_clock_bias_m: f64,
    opts: &SolverOpts,
) -> Result<PositionEstimate, Error> {
    if sv_positions.len() != pseudo_ranges.len() {
        return Err(Error::MatrixDimension);
    }

    let size = sv_positions.len();
    if size < MIN_MEASUREMENTS {
        return Err(Error::InsufficientMeasurements(size));
    }

    let mut state = State {
        position: initial_position,
        clock_bias_m: initial_clock_bias_m,
    };

    for iteration in 1..=opts.max_iterations {
        let nav = Navigation::new(&state, sv_positions, pseudo_ranges)?;
        let q = nav.q_matrix()?;
        let dx = nav.correction(&q)?;

        state.update(&dx);

        let correction_m = dx.fixed_rows::<3>(0).norm();

        debug!(
            "{} - iter #{} |dx|={:.3E}m clock_bias={:.3}m",
            t, iteration, correction_m, state.clock_bias_m
        );

        if correction_m < opts.convergence_threshold_m {
            let position = Position::from_ecef(state.position);
            let (lat_ddeg, lon_ddeg, _) = position.lat_lon_alt();
            let dop = DilutionOfPrecision::new(&q, lat_ddeg.to_radians(), lon_ddeg.to_radians());

            return Ok(PositionEstimate {
                epoch: t,
                position,
                clock_bias_m: state.clock_bias_m,
                iterations: iteration,
                dop,
            });
        }
    }

    Err(Error::DidNotConverge(opts.max_iterations))
}
