use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{TrainingError, TrainingResult};

/// Every piece of text the formatter writes around the numbers.
///
/// Missing keys in a labels file fall back to the English set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub training_type: String,
    pub duration: String,
    pub minutes: String,
    pub distance: String,
    pub kilometers: String,
    pub speed: String,
    pub speed_unit: String,
    pub calories: String,
    pub running: String,
    pub walking: String,
    pub swimming: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

impl Labels {
    pub fn english() -> Self {
        Self {
            training_type: "Training type".into(),
            duration: "Duration".into(),
            minutes: "min".into(),
            distance: "Distance".into(),
            kilometers: "km.".into(),
            speed: "Avg speed".into(),
            speed_unit: "km/h".into(),
            calories: "Calories burned".into(),
            running: "Running".into(),
            walking: "Walking".into(),
            swimming: "Swimming".into(),
        }
    }

    pub fn russian() -> Self {
        Self {
            training_type: "Тип тренировки".into(),
            duration: "Длительность".into(),
            minutes: "мин".into(),
            distance: "Дистанция".into(),
            kilometers: "км.".into(),
            speed: "Ср. скорость".into(),
            speed_unit: "км/ч".into(),
            calories: "Потрачено ккал".into(),
            running: "Бег".into(),
            walking: "Ходьба".into(),
            swimming: "Плавание".into(),
        }
    }

    pub fn from_json_str(json: &str) -> TrainingResult<Self> {
        serde_json::from_str(json).map_err(TrainingError::labels)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> TrainingResult<Self> {
        let path = path.as_ref();
        debug!("loading labels from {}", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| TrainingError::labels(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_falls_back_to_english() {
        let labels = Labels::from_json_str(r#"{"running": "Jogging", "minutes": "minutes"}"#)
            .unwrap();
        assert_eq!(labels.running, "Jogging");
        assert_eq!(labels.minutes, "minutes");
        assert_eq!(labels.walking, "Walking");
        assert_eq!(labels.calories, "Calories burned");
    }

    #[test]
    fn malformed_json_is_a_labels_error() {
        let err = Labels::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, TrainingError::Labels(_)));
    }

    #[test]
    fn loads_labels_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Labels::russian()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let labels = Labels::from_json_file(file.path()).unwrap();
        assert_eq!(labels, Labels::russian());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Labels::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
