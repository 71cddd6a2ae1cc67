use log::debug;

use crate::constants::running::{MEAN_SPEED_MULTIPLIER, MEAN_SPEED_SHIFT};
use crate::constants::units::{M_IN_KM, SECONDS_IN_HOUR};
use crate::session::Session;
use crate::training::CaloriesCalculator;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl CaloriesCalculator for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        let calories = (MEAN_SPEED_MULTIPLIER * speed + MEAN_SPEED_SHIFT) * self.session.weight()
            / M_IN_KM
            * self.session.duration_seconds()
            / SECONDS_IN_HOUR;
        debug!("running at {:.2} km/h burned {:.2} kcal", speed, calories);
        calories
    }
}
