use std::fmt;

/// Summary of a completed training.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    /// h
    pub duration: f64,
    /// km
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::swimming(
        InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        },
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    )]
    #[case::rounding(
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 0.5,
            distance: 6.5,
            speed: 13.0,
            calories: 385.2,
        },
        "Тип тренировки: Running; Длительность: 0.500 ч.; Дистанция: 6.500 км; \
         Ср. скорость: 13.000 км/ч; Потрачено ккал: 385.200."
    )]
    #[case::negative(
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 0.0,
            speed: 0.0,
            calories: -90.0,
        },
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 0.000 км; \
         Ср. скорость: 0.000 км/ч; Потрачено ккал: -90.000."
    )]
    fn test_info_message(#[case] info_message: InfoMessage, #[case] expected: &str) {
        assert_eq!(info_message.message(), expected);
        assert_eq!(info_message.to_string(), expected);
    }
}
