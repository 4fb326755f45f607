use crate::{M_IN_KM, MIN_IN_H, Session, Workout, WorkoutCode};

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub const CALORIE_SPEED_FACTOR: f64 = 18.0;
    pub const CALORIE_SPEED_SHIFT: f64 = 20.0;

    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Workout for Running {
    const CODE: WorkoutCode = WorkoutCode::Run;
    const LABEL: &'static str = "Running";

    fn session(&self) -> &Session {
        &self.session
    }

    fn calories(&self) -> f64 {
        (Self::CALORIE_SPEED_FACTOR * self.mean_speed() - Self::CALORIE_SPEED_SHIFT)
            * self.session.kilograms()
            / M_IN_KM
            * self.session.hours()
            * MIN_IN_H
    }
}
