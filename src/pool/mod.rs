//! Epoch grouping
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::prelude::{Epoch, Measurement};

pub mod prefit;

/// Partitions an unordered batch of [Measurement]s per sampling [Epoch].
/// Grouping uses strict [Epoch] equality: two samples that differ by
/// clock jitter only (even 1 ns) are not coalesced.
/// Returned map is sorted in chronological order.
pub fn group(measurements: &[Measurement]) -> BTreeMap<Epoch, Vec<Measurement>> {
    measurements
        .iter()
        .cloned()
        .into_group_map_by(|m| m.epoch)
        .into_iter()
        .collect()
}

/// Set of [Measurement]s sharing the same sampling [Epoch],
/// proposed to the navigation solver.
#[derive(Debug, Clone)]
pub struct Pool {
    /// Sampling [Epoch]
    pub(crate) epoch: Epoch,
    /// Current [Measurement]s
    inner: Vec<Measurement>,
}

impl Pool {
    /// Builds new [Pool] for this [Epoch]
    pub fn new(epoch: Epoch, measurements: Vec<Measurement>) -> Self {
        Self {
            epoch,
            inner: measurements,
        }
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Measurement) -> bool,
    {
        self.inner.retain(f)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.inner
    }
}

#[cfg(test)]
mod test {
    use super::group;
    use crate::prelude::{Constellation, Duration, Epoch, Measurement, Vector3, SV};

    #[test]
    fn exact_epoch_grouping() {
        let t0 = Epoch::from_gpst_seconds(1000.0);
        let t1 = t0 + Duration::from_seconds(1.0);
        let jitter = t0 + Duration::from_nanoseconds(1.0);

        let batch = [t1, t0, jitter, t0, t1]
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Measurement::new(
                    SV::new(Constellation::GPS, i as u8 + 1),
                    *t,
                    Vector3::new(1.0, 2.0, 3.0),
                    2.0E7,
                )
            })
            .collect::<Vec<_>>();

        let groups = group(&batch);
        assert_eq!(groups.len(), 3);

        let epochs = groups.keys().copied().collect::<Vec<_>>();
        assert_eq!(epochs, vec![t0, jitter, t1]);

        assert_eq!(groups[&t0].len(), 2);
        assert_eq!(groups[&jitter].len(), 1);
        assert_eq!(groups[&t1].len(), 2);
    }

    #[test]
    fn empty_batch() {
        assert!(group(&[]).is_empty());
    }
}
