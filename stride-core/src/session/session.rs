use std::time::Duration;

use log::{trace, warn};

use crate::constants::units::{M_IN_KM, SECONDS_IN_HOUR};
use crate::errors::{TrainingError, TrainingResult};

/// Measurements shared by every training kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    training_type: String,
    action_count: u32,
    step_length: f64,
    duration: Duration,
    weight: f64,
}

impl Session {
    /// `action_count` is steps or strokes, `step_length` is meters per action
    /// and `weight` is kilograms. Fails when `duration` is zero, since every
    /// speed and calorie formula divides by it.
    pub fn new(
        training_type: impl Into<String>,
        action_count: u32,
        step_length: f64,
        duration: Duration,
        weight: f64,
    ) -> TrainingResult<Self> {
        let training_type = training_type.into();
        if duration.is_zero() {
            warn!("rejecting {} session with zero duration", training_type);
            return Err(TrainingError::InvalidDuration);
        }

        Ok(Self {
            training_type,
            action_count,
            step_length,
            duration,
            weight,
        })
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Distance covered in kilometers.
    pub fn distance(&self) -> f64 {
        let distance = f64::from(self.action_count) * self.step_length / M_IN_KM;
        trace!("{} distance: {} km", self.training_type, distance);
        distance
    }

    /// Average speed over the whole session in km/h.
    pub fn mean_speed(&self) -> f64 {
        self.distance() / self.duration_seconds() * SECONDS_IN_HOUR
    }
}
