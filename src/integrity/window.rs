use std::collections::VecDeque;

use crate::prelude::{Epoch, Error, Measurement, Position, PositionEstimate};

/// One accepted [Epoch], as retained by the [IntegrityWindow]
#[derive(Debug, Clone, PartialEq)]
pub struct IntegritySample {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Resolved [Position]
    pub position: Position,
    /// CN0 (dB.Hz) of each measurement that reported one
    pub cn0_dbhz: Vec<f64>,
    /// Doppler shifts (Hz) of each measurement that reported one
    pub doppler_hz: Vec<f64>,
}

impl IntegritySample {
    /// Builds [IntegritySample] from a resolved [PositionEstimate]
    /// and the [Measurement]s sampled at the same [Epoch].
    /// Missing signal data is skipped, never defaulted.
    pub fn new(estimate: &PositionEstimate, measurements: &[Measurement]) -> Self {
        Self {
            epoch: estimate.epoch,
            position: estimate.position,
            cn0_dbhz: measurements.iter().filter_map(|m| m.cn0_dbhz).collect(),
            doppler_hz: measurements.iter().filter_map(|m| m.doppler_hz).collect(),
        }
    }
}

/// Bounded FIFO of the latest accepted epochs.
/// Oldest sample is evicted on overflow.
#[derive(Debug, Clone)]
pub struct IntegrityWindow {
    capacity: usize,
    inner: VecDeque<IntegritySample>,
}

impl IntegrityWindow {
    /// Allocates new [IntegrityWindow] that holds up to `capacity` epochs
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidWindowSize);
        }
        Ok(Self {
            capacity,
            inner: VecDeque::with_capacity(capacity),
        })
    }

    /// Appends a new [IntegritySample]. Samples must be presented
    /// in chronological order: older samples are rejected and
    /// leave the window untouched.
    pub fn push(&mut self, sample: IntegritySample) -> Result<(), Error> {
        if let Some(newest) = self.newest() {
            if sample.epoch < newest.epoch {
                return Err(Error::OutOfOrderEpoch);
            }
        }
        if self.inner.len() == self.capacity {
            self.inner.pop_front();
        }
        self.inner.push_back(sample);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.len() == self.capacity
    }

    pub fn oldest(&self) -> Option<&IntegritySample> {
        self.inner.front()
    }

    pub fn newest(&self) -> Option<&IntegritySample> {
        self.inner.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntegritySample> {
        self.inner.iter()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
