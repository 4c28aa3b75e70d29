//! Monitoring session
use log::{error, info};

use crate::{
    integrity::{IntegrityMonitor, IntegritySample, IntegrityVerdict, IntegrityWindow},
    pool::group,
    prelude::{Config, Epoch, Error, Measurement, Report, Solver},
};

/// [Session] is the single owner of the [IntegrityWindow].
/// Batches are processed synchronously, one at a time, so that
/// the window is always fed in chronological order.
#[derive(Debug, Clone)]
pub struct Session {
    /// [Solver]
    solver: Solver,
    /// [IntegrityMonitor]
    monitor: IntegrityMonitor,
    /// [IntegrityWindow], persisting across batches
    window: IntegrityWindow,
}

impl Session {
    /// Opens a new monitoring [Session]
    pub fn new(cfg: &Config) -> Result<Self, Error> {
        let window = IntegrityWindow::new(cfg.integrity.window_size)?;
        info!(
            "new session: integrity window of {} epochs",
            cfg.integrity.window_size
        );
        Ok(Self {
            window,
            solver: Solver::new(cfg),
            monitor: IntegrityMonitor::new(&cfg.integrity),
        })
    }

    /// Processes a new batch of [Measurement]s, in any order.
    /// Returns one [Report] per [Epoch] found in the batch, in chronological order.
    /// Failure of one [Epoch] never prevents the others from being processed.
    pub fn process(&mut self, batch: &[Measurement]) -> Vec<Report> {
        group(batch)
            .into_iter()
            .map(|(t, measurements)| self.process_epoch(t, &measurements))
            .collect()
    }

    fn process_epoch(&mut self, t: Epoch, measurements: &[Measurement]) -> Report {
        match self.solver.resolve_pool(t, measurements) {
            Ok((estimate, pool)) => {
                // signals rejected by the pre-fit do not take part in the integrity
                let sample = IntegritySample::new(&estimate, pool.measurements());
                let verdict = match self.window.push(sample) {
                    Ok(_) => self.monitor.evaluate(t, &self.window),
                    Err(e) => {
                        error!("{} - integrity window: {}", t, e);
                        IntegrityVerdict::insufficient_data(t)
                    },
                };
                Report::assemble(t, Ok(estimate), verdict)
            },
            Err(e) => Report::assemble(t, Err(e), IntegrityVerdict::insufficient_data(t)),
        }
    }

    /// [IntegrityWindow] current state
    pub fn window(&self) -> &IntegrityWindow {
        &self.window
    }

    /// Resets the [IntegrityWindow]: following epochs
    /// need to fill it up again before a verdict can be formed.
    pub fn reset(&mut self) {
        self.window.clear();
    }
}
