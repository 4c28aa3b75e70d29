#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod error;
mod integrity;
mod measurement;
mod navigation;
mod pool;
mod position;
mod report;
mod session;
mod solver;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, InitialGuess, IntegrityOpts, PrefilterOpts, SolverOpts};
    pub use crate::error::Error;
    pub use crate::integrity::{
        IntegrityCause, IntegrityMonitor, IntegritySample, IntegrityVerdict, IntegrityWindow,
    };
    pub use crate::measurement::{constellation_from_android_code, Measurement};
    pub use crate::navigation::{trilaterate, DilutionOfPrecision, PositionEstimate};
    pub use crate::pool::group;
    pub use crate::position::{haversine_m, Position};
    pub use crate::report::Report;
    pub use crate::session::Session;
    pub use crate::solver::Solver;
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
