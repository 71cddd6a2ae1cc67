pub mod constants;
pub mod errors;
pub mod logging;
pub mod report;
pub mod samples;
pub mod session;
pub mod training;

pub use errors::TrainingError;
pub use report::{Labels, read_data};
pub use session::{Session, Summary};
pub use training::{CaloriesCalculator, Running, Swimming, Training, Walking};
