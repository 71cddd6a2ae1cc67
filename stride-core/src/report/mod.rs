//! Text rendering of summaries.

mod labels;

pub use labels::Labels;

use crate::session::Summary;
use crate::training::CaloriesCalculator;

/// Renders the five-line block for one summary. Duration is printed in
/// unrounded minutes, every other number with two decimals.
pub fn format_summary(summary: &Summary, labels: &Labels) -> String {
    format!(
        "{}: {}\n{}: {} {}\n{}: {:.2} {}\n{}: {:.2} {}\n{}: {:.2}\n",
        labels.training_type,
        summary.training_type(),
        labels.duration,
        summary.duration_minutes(),
        labels.minutes,
        labels.distance,
        summary.distance(),
        labels.kilometers,
        labels.speed,
        summary.speed(),
        labels.speed_unit,
        labels.calories,
        summary.calories(),
    )
}

/// Summarizes a training and renders it in one step.
pub fn read_data(training: &dyn CaloriesCalculator, labels: &Labels) -> String {
    format_summary(&training.summary(), labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::training::Running;
    use std::time::Duration;

    #[test]
    fn renders_english_block() {
        let summary = Summary::new("Running", Duration::from_secs(1800), 3.25, 6.5, 5.048575);
        assert_eq!(
            format_summary(&summary, &Labels::english()),
            "Training type: Running\n\
             Duration: 30 min\n\
             Distance: 3.25 km.\n\
             Avg speed: 6.50 km/h\n\
             Calories burned: 5.05\n"
        );
    }

    #[test]
    fn renders_russian_block() {
        let summary = Summary::new("Плавание", Duration::from_secs(5400), 2.76, 0.1666, 323.0);
        assert_eq!(
            format_summary(&summary, &Labels::russian()),
            "Тип тренировки: Плавание\n\
             Длительность: 90 мин\n\
             Дистанция: 2.76 км.\n\
             Ср. скорость: 0.17 км/ч\n\
             Потрачено ккал: 323.00\n"
        );
    }

    #[test]
    fn block_has_five_lines() {
        let summary = Summary::new("Walking", Duration::from_secs(13500), 13.0, 3.4666, 15.797);
        let text = format_summary(&summary, &Labels::english());
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn duration_is_not_rounded() {
        let summary = Summary::new("Walking", Duration::from_secs(95), 0.1, 0.1, 0.1);
        let text = format_summary(&summary, &Labels::english());
        let duration_line = text.lines().nth(1).unwrap();
        assert!(duration_line.starts_with("Duration: 1.58333"));
        assert!(duration_line.ends_with(" min"));
    }

    #[test]
    fn read_data_formats_training_summary() {
        let run = Running::new(
            Session::new("Running", 5000, 0.65, Duration::from_secs(1800), 85.0).unwrap(),
        );
        let text = read_data(&run, &Labels::english());
        assert!(text.contains("Distance: 3.25 km.\n"));
        assert!(text.contains("Avg speed: 6.50 km/h\n"));
        assert!(text.contains("Calories burned: 5.05\n"));
    }
}
