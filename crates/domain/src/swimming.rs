use crate::{Laps, M_IN_KM, Meters, Session, Workout, WorkoutCode};

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    pub length_pool: Meters,
    pub count_pool: Laps,
}

impl Swimming {
    pub const CALORIE_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIE_WEIGHT_FACTOR: f64 = 2.0;

    #[must_use]
    pub fn new(session: Session, length_pool: Meters, count_pool: Laps) -> Self {
        Self {
            session,
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    const CODE: WorkoutCode = WorkoutCode::Swm;
    const LABEL: &'static str = "Swimming";
    const STEP_LENGTH: f64 = 1.38;

    fn session(&self) -> &Session {
        &self.session
    }

    /// Derived from the pool geometry instead of the number of strokes.
    fn mean_speed(&self) -> f64 {
        f64::from(self.length_pool) * f64::from(self.count_pool) / M_IN_KM / self.session.hours()
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIE_SPEED_SHIFT)
            * Self::CALORIE_WEIGHT_FACTOR
            * self.session.kilograms()
    }
}
