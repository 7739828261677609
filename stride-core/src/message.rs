use serde::Serialize;
use std::fmt;

/// Summary of one completed training session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
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

    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_format() {
        let msg = InfoMessage::new("Running", 1.0, 9.75, 9.75, 699.75);
        assert_eq!(
            msg.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn rounds_to_three_decimals() {
        let msg = InfoMessage::new("Swimming", 1.5, 0.9936, 0.6666666, 12.34567);
        let text = msg.get_message();
        assert!(text.contains("Длительность: 1.500 ч.;"));
        assert!(text.contains("Дистанция: 0.994 км;"));
        assert!(text.contains("Ср. скорость: 0.667 км/ч;"));
        assert!(text.ends_with("Потрачено ккал: 12.346."));
    }

    #[test]
    fn serializes_raw_fields() {
        let msg = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["training_type"], "Swimming");
        assert_eq!(json["calories"], 336.0);
    }
}
