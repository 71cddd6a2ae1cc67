//! Metric calculators for each kind of training.
//!
//! Every kind wraps a base [`Session`] and implements [`CaloriesCalculator`].
//! Distance and speed default to the step-based formulas on the session;
//! a kind overrides them only when it measures movement differently
//! (swimming uses pool geometry for speed).

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::session::{Session, Summary};

/// What the driver and the formatter need from a training.
pub trait CaloriesCalculator {
    fn session(&self) -> &Session;

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.session().distance()
    }

    /// Average speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.session().mean_speed()
    }

    /// Energy spent in kcal.
    fn calories(&self) -> f64;

    fn summary(&self) -> Summary {
        let session = self.session();
        Summary::new(
            session.training_type(),
            session.duration(),
            self.distance(),
            self.mean_speed(),
            self.calories(),
        )
    }
}

/// A bare session has no calorie model.
impl CaloriesCalculator for Session {
    fn session(&self) -> &Session {
        self
    }

    fn calories(&self) -> f64 {
        0.0
    }
}

/// The closed set of training kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Training {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Training {
    pub fn as_calculator(&self) -> &dyn CaloriesCalculator {
        match self {
            Training::Running(t) => t,
            Training::Walking(t) => t,
            Training::Swimming(t) => t,
        }
    }
}

impl CaloriesCalculator for Training {
    fn session(&self) -> &Session {
        self.as_calculator().session()
    }

    fn distance(&self) -> f64 {
        self.as_calculator().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_calculator().mean_speed()
    }

    fn calories(&self) -> f64 {
        self.as_calculator().calories()
    }

    fn summary(&self) -> Summary {
        self.as_calculator().summary()
    }
}

impl From<Running> for Training {
    fn from(t: Running) -> Self {
        Training::Running(t)
    }
}

impl From<Walking> for Training {
    fn from(t: Walking) -> Self {
        Training::Walking(t)
    }
}

impl From<Swimming> for Training {
    fn from(t: Swimming) -> Self {
        Training::Swimming(t)
    }
}
