//! Per epoch reporting
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::{Epoch, Error, IntegrityVerdict, PositionEstimate};

/// [Report] of a single [Epoch]: navigation outcome
/// and integrity of the measurement stream at that time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Resolved [PositionEstimate], or why this epoch was skipped
    pub solution: Result<PositionEstimate, Error>,
    /// [IntegrityVerdict]
    pub verdict: IntegrityVerdict,
}

impl Report {
    /// Merges navigation and integrity outputs into a [Report]
    pub fn assemble(
        epoch: Epoch,
        solution: Result<PositionEstimate, Error>,
        verdict: IntegrityVerdict,
    ) -> Self {
        Self {
            epoch,
            solution,
            verdict,
        }
    }

    /// Returns [PositionEstimate], if this epoch was resolved
    pub fn estimate(&self) -> Option<&PositionEstimate> {
        self.solution.as_ref().ok()
    }

    /// True if this epoch was resolved and its stream is trusted.
    pub fn is_trusted(&self) -> bool {
        self.solution.is_ok() && !self.verdict.is_suspect && !self.verdict.is_unknown()
    }
}
