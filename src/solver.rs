//! Epoch solver
use log::{debug, error, info};

use crate::{
    cfg::InitialGuess,
    constants::MIN_MEASUREMENTS,
    navigation::trilaterate,
    pool::Pool,
    prelude::{Config, Epoch, Error, Measurement, PositionEstimate, Vector3},
};

/// [Solver] resolves one [PositionEstimate] per [Epoch].
/// It holds no state between epochs: epochs may be resolved
/// in any order.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    /// Solver parametrization
    pub cfg: Config,
}

impl Solver {
    /// Creates a new [Solver]
    pub fn new(cfg: &Config) -> Self {
        debug!("solver initial guess: {}", cfg.solver.initial_guess);
        Self { cfg: cfg.clone() }
    }

    /// [PositionEstimate] resolution attempt.
    /// ## Inputs
    /// - t: sampling [Epoch]
    /// - measurements: all [Measurement]s sampled at `t`
    pub fn resolve(&self, t: Epoch, measurements: &[Measurement]) -> Result<PositionEstimate, Error> {
        let (estimate, _) = self.resolve_pool(t, measurements)?;
        Ok(estimate)
    }

    /// Same as [Solver::resolve], also returns the [Pool] of
    /// [Measurement]s that actually contributed to the solution.
    pub(crate) fn resolve_pool(
        &self,
        t: Epoch,
        measurements: &[Measurement],
    ) -> Result<(PositionEstimate, Pool), Error> {
        let mut pool = Pool::new(t, measurements.to_vec());

        if pool.len() < MIN_MEASUREMENTS {
            // no need to proceed further
            error!("{} - not enough measurements ({})", t, pool.len());
            return Err(Error::InsufficientMeasurements(pool.len()));
        }

        pool.pre_fit(&self.cfg)?;

        if pool.len() < MIN_MEASUREMENTS {
            error!("{} - not enough measurements match pre-fit criteria", t);
            return Err(Error::InsufficientMeasurements(pool.len()));
        }

        let (sv_positions, pseudo_ranges): (Vec<Vector3<f64>>, Vec<f64>) = pool
            .measurements()
            .iter()
            .map(|m| (m.sv_position_m, m.pseudo_range_m))
            .unzip();

        let initial = self.initial_position(&sv_positions);

        let estimate = trilaterate(
            t,
            &sv_positions,
            &pseudo_ranges,
            initial,
            0.0,
            &self.cfg.solver,
        )
        .map_err(|e| {
            error!("{} - navigation error: {}", t, e);
            e
        })?;

        if let Some(max_gdop) = self.cfg.solver.max_gdop {
            if estimate.dop.gdop > max_gdop {
                error!("{} - solution invalidated: gdop={:.3}", t, estimate.dop.gdop);
                return Err(Error::MaxGdopExceeded(estimate.dop.gdop));
            }
        }

        info!(
            "{} - lat={:.6}°, lon={:.6}°, alt={:.3}m (dt={})",
            t,
            estimate.latitude_ddeg(),
            estimate.longitude_ddeg(),
            estimate.altitude_m(),
            estimate.clock_offset()
        );

        Ok((estimate, pool))
    }

    /* iteration starting point */
    fn initial_position(&self, sv_positions: &[Vector3<f64>]) -> Vector3<f64> {
        match self.cfg.solver.initial_guess {
            InitialGuess::EarthCenter => Vector3::zeros(),
            InitialGuess::Centroid => {
                sv_positions.iter().sum::<Vector3<f64>>() / sv_positions.len() as f64
            },
            InitialGuess::Apriori(x, y, z) => Vector3::new(x, y, z),
        }
    }
}
