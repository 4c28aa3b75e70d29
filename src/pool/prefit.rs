use std::collections::HashSet;

use log::{debug, error};

use crate::{
    pool::Pool,
    prelude::{Config, Constellation, Error},
};

impl Pool {
    /// Apply Pre fit criterias. Fails when the pool holds
    /// invalid or duplicated data, in which case the epoch is discarded.
    pub fn pre_fit(&mut self, cfg: &Config) -> Result<(), Error> {
        self.pre_fit_sanity()?;

        if let Some(constellations) = &cfg.prefilter.constellations {
            self.pre_fit_constellations(constellations);
        }
        if let Some(min_cn0) = cfg.prefilter.min_cn0_dbhz {
            self.pre_fit_min_cn0(min_cn0);
        }
        Ok(())
    }

    fn pre_fit_sanity(&self) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(self.len());
        for m in self.measurements().iter() {
            if !seen.insert(m.sv) {
                error!("{} ({}) - duplicate measurement", self.epoch, m.sv);
                return Err(Error::DuplicateSatellite(m.sv));
            }
            if !m.valid_pseudo_range() {
                error!(
                    "{} ({}) - invalid pseudo range {}",
                    self.epoch, m.sv, m.pseudo_range_m
                );
                return Err(Error::InvalidPseudoRange);
            }
        }
        Ok(())
    }

    fn pre_fit_constellations(&mut self, constellations: &[Constellation]) {
        let t = self.epoch;
        self.retain(|m| {
            let retained = constellations.contains(&m.constellation());
            if !retained {
                debug!("{} ({}) - rejected constellation", t, m.sv);
            }
            retained
        });
    }

    fn pre_fit_min_cn0(&mut self, min_cn0: f64) {
        let t = self.epoch;
        self.retain(|m| match m.cn0_dbhz {
            Some(cn0) => {
                if cn0 < min_cn0 {
                    debug!("{} ({}) - rejected cn0={:.1}dB.Hz", t, m.sv, cn0);
                    false
                } else {
                    true
                }
            },
            None => true,
        });
    }
}
