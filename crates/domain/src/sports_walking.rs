use crate::{Centimeters, MIN_IN_H, Session, Workout, WorkoutCode};

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Session,
    pub height: Centimeters,
}

impl SportsWalking {
    pub const CALORIE_WEIGHT_FACTOR: f64 = 0.035;
    pub const CALORIE_SPEED_HEIGHT_FACTOR: f64 = 0.029;
    pub const CALORIE_SPEED_EXPONENT: i32 = 2;

    #[must_use]
    pub fn new(session: Session, height: Centimeters) -> Self {
        Self { session, height }
    }
}

impl Workout for SportsWalking {
    const CODE: WorkoutCode = WorkoutCode::Wlk;
    const LABEL: &'static str = "SportsWalking";

    fn session(&self) -> &Session {
        &self.session
    }

    /// The squared speed is floor-divided by the height, so the speed term only contributes
    /// once the squared speed in km²/h² reaches the height in cm.
    fn calories(&self) -> f64 {
        let weight = self.session.kilograms();
        (Self::CALORIE_WEIGHT_FACTOR * weight
            + floor_div(
                self.mean_speed().powi(Self::CALORIE_SPEED_EXPONENT),
                f64::from(self.height),
            ) * Self::CALORIE_SPEED_HEIGHT_FACTOR
                * weight)
            * self.session.hours()
            * MIN_IN_H
    }
}

/// Largest integral value not greater than `dividend / divisor`.
///
/// The quotient is derived from the exact remainder instead of the rounded result of the division,
/// e.g. `floor_div(1.0, 0.1)` is 9, not 10. A zero quotient carries the sign of
/// `dividend / divisor`.
fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;

    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }

    let floored = quotient.floor();

    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
