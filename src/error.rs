use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::SV;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Error {
    /// A 3D position and clock bias requires at least 4 measurements
    /// (after pre-fit filtering). The epoch is skipped.
    #[error("not enough measurements: {0} (4 required)")]
    InsufficientMeasurements(usize),

    /// Normal equations could not be inverted: the satellite
    /// geometry is degenerate (coplanar, duplicated positions..).
    #[error("unsolvable geometry: failed to invert matrix")]
    UnsolvableGeometry,

    /// Gauss-Newton iteration did not reach the convergence
    /// threshold within the configured iteration cap.
    #[error("did not converge after {0} iterations")]
    DidNotConverge(usize),

    /// Solution rejected because its geometric dilution
    /// of precision exceeds the configured limit.
    #[error("rejected solution: gdop {0} limit exceeded")]
    MaxGdopExceeded(f64),

    /// Satellite positions and pseudo ranges must be paired one to one.
    #[error("internal error: invalid matrix setup")]
    MatrixDimension,

    /// Pseudo range that is not finite or not positive.
    #[error("invalid pseudo range observation")]
    InvalidPseudoRange,

    /// Each [SV] may only contribute once per epoch.
    #[error("duplicate measurement for {0}")]
    DuplicateSatellite(SV),

    /// Integrity window only accepts epochs in non decreasing order.
    #[error("out of order epoch: older than latest integrity sample")]
    OutOfOrderEpoch,

    /// Integrity window needs to hold at least one epoch.
    #[error("invalid integrity window size")]
    InvalidWindowSize,
}
