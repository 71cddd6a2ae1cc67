//! Literal demo sessions printed by the CLI.

use std::time::Duration;

use crate::constants::stride::{STEP_LENGTH, SWIMMING_STROKE_LENGTH};
use crate::errors::TrainingResult;
use crate::report::Labels;
use crate::session::Session;
use crate::training::{Running, Swimming, Training, Walking};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;

pub fn swimming(labels: &Labels) -> TrainingResult<Swimming> {
    let session = Session::new(
        labels.swimming.as_str(),
        2000,
        SWIMMING_STROKE_LENGTH,
        Duration::from_secs(90 * MINUTE),
        85.0,
    )?;
    Ok(Swimming::new(session, 50, 5))
}

pub fn walking(labels: &Labels) -> TrainingResult<Walking> {
    let session = Session::new(
        labels.walking.as_str(),
        20000,
        STEP_LENGTH,
        Duration::from_secs(3 * HOUR + 45 * MINUTE),
        85.0,
    )?;
    Walking::new(session, 185.0)
}

pub fn running(labels: &Labels) -> TrainingResult<Running> {
    let session = Session::new(
        labels.running.as_str(),
        5000,
        STEP_LENGTH,
        Duration::from_secs(30 * MINUTE),
        85.0,
    )?;
    Ok(Running::new(session))
}

/// One training of each kind, in print order.
pub fn all(labels: &Labels) -> TrainingResult<Vec<Training>> {
    Ok(vec![
        swimming(labels)?.into(),
        walking(labels)?.into(),
        running(labels)?.into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::read_data;
    use crate::training::CaloriesCalculator;

    #[test]
    fn samples_render_expected_numbers() {
        let labels = Labels::english();
        let rendered: Vec<String> = all(&labels)
            .unwrap()
            .iter()
            .map(|t| read_data(t, &labels))
            .collect();

        assert_eq!(
            rendered,
            vec![
                "Training type: Swimming\nDuration: 90 min\nDistance: 2.76 km.\nAvg speed: 0.17 km/h\nCalories burned: 323.00\n",
                "Training type: Walking\nDuration: 225 min\nDistance: 13.00 km.\nAvg speed: 3.47 km/h\nCalories burned: 15.80\n",
                "Training type: Running\nDuration: 30 min\nDistance: 3.25 km.\nAvg speed: 6.50 km/h\nCalories burned: 5.05\n",
            ]
        );
    }

    #[test]
    fn samples_use_localized_type_names() {
        let labels = Labels::russian();
        let names: Vec<String> = all(&labels)
            .unwrap()
            .iter()
            .map(|t| t.session().training_type().to_string())
            .collect();
        assert_eq!(names, vec!["Плавание", "Ходьба", "Бег"]);
    }
}
