use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::constants::units::SECONDS_IN_MINUTE;

/// Derived metrics for one session. Built once by
/// [`CaloriesCalculator::summary`](crate::training::CaloriesCalculator::summary)
/// and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    training_type: String,
    #[serde(rename = "duration_minutes", serialize_with = "serialize_minutes")]
    duration: Duration,
    /// km
    distance: f64,
    /// km/h
    speed: f64,
    /// kcal
    calories: f64,
}

fn serialize_minutes<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() / SECONDS_IN_MINUTE)
}

impl Summary {
    pub fn new(
        training_type: impl Into<String>,
        duration: Duration,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Unrounded duration in minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / SECONDS_IN_MINUTE
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }
}
