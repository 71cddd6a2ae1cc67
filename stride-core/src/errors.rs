use thiserror::Error as ThisError;

#[derive(Debug, ThisError, PartialEq)]
#[non_exhaustive]
pub enum TrainingError {
    #[error("training duration must be greater than zero")]
    InvalidDuration,
    #[error("height must be a positive number of centimeters, got {0}")]
    InvalidHeight(f64),
    #[error("labels: {0}")]
    Labels(String),
}

impl TrainingError {
    pub fn labels<D: std::fmt::Display>(d: D) -> Self {
        TrainingError::Labels(d.to_string())
    }
}

pub type TrainingResult<T> = Result<T, TrainingError>;
