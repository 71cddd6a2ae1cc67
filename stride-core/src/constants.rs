//! Conversion factors and fitted calorie coefficients.
//!
//! The calorie coefficients are empirical and must stay exactly as written;
//! the regression tests in `training` pin their output.

/// Unit conversions.
pub mod units {
    pub const M_IN_KM: f64 = 1000.0;
    pub const CM_IN_M: f64 = 100.0;
    pub const SECONDS_IN_HOUR: f64 = 3600.0;
    pub const SECONDS_IN_MINUTE: f64 = 60.0;
    /// km/h to m/s, rounded the way the walking formula was fitted.
    pub const KMH_IN_MSEC: f64 = 0.278;
}

/// Default stride lengths in meters.
pub mod stride {
    /// One walking or running step.
    pub const STEP_LENGTH: f64 = 0.65;
    /// One swimming stroke.
    pub const SWIMMING_STROKE_LENGTH: f64 = 1.38;
}

pub mod running {
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

pub mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

pub mod swimming {
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
