use log::{debug, warn};

use crate::constants::units::{CM_IN_M, KMH_IN_MSEC, SECONDS_IN_HOUR};
use crate::constants::walking::{SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER};
use crate::errors::{TrainingError, TrainingResult};
use crate::session::Session;
use crate::training::CaloriesCalculator;

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    session: Session,
    /// cm
    height: f64,
}

impl Walking {
    /// The calorie formula divides by height, so it must be a positive,
    /// finite number of centimeters.
    pub fn new(session: Session, height: f64) -> TrainingResult<Self> {
        if !(height.is_finite() && height > 0.0) {
            warn!("rejecting walking session with height {}", height);
            return Err(TrainingError::InvalidHeight(height));
        }
        Ok(Self { session, height })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl CaloriesCalculator for Walking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn calories(&self) -> f64 {
        let speed_ms = self.mean_speed() * KMH_IN_MSEC;
        let height_m = self.height / CM_IN_M;
        let weight = self.session.weight();
        let calories = (WEIGHT_MULTIPLIER * weight
            + (speed_ms * speed_ms / height_m) * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_seconds()
            / SECONDS_IN_HOUR;
        debug!("walking at {:.3} m/s burned {:.2} kcal", speed_ms, calories);
        calories
    }
}
