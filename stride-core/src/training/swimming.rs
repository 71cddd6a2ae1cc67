use log::debug;

use crate::constants::swimming::{MEAN_SPEED_SHIFT, WEIGHT_MULTIPLIER};
use crate::constants::units::{M_IN_KM, SECONDS_IN_HOUR};
use crate::session::Session;
use crate::training::CaloriesCalculator;

/// Swimming reports distance from strokes like the other kinds, but speed
/// from the lengths actually swum.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    /// m
    pool_length: u32,
    pool_crossings: u32,
}

impl Swimming {
    pub fn new(session: Session, pool_length: u32, pool_crossings: u32) -> Self {
        Self {
            session,
            pool_length,
            pool_crossings,
        }
    }

    pub fn pool_length(&self) -> u32 {
        self.pool_length
    }

    pub fn pool_crossings(&self) -> u32 {
        self.pool_crossings
    }
}

impl CaloriesCalculator for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn mean_speed(&self) -> f64 {
        let swum = f64::from(self.pool_length) * f64::from(self.pool_crossings);
        swum / M_IN_KM / self.session.duration_seconds() * SECONDS_IN_HOUR
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        let calories = (speed + MEAN_SPEED_SHIFT)
            * WEIGHT_MULTIPLIER
            * self.session.weight()
            * self.session.duration_seconds()
            / SECONDS_IN_HOUR;
        debug!("swimming at {:.2} km/h burned {:.2} kcal", speed, calories);
        calories
    }
}
