use derive_more::From;

use crate::{Actions, Hours, InfoMessage, Kilograms, Running, SportsWalking, Swimming, WorkoutCode};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Readings shared by all kinds of training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub action: Actions,
    pub duration: Hours,
    pub weight: Kilograms,
}

impl Session {
    #[must_use]
    pub fn new(action: Actions, duration: Hours, weight: Kilograms) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.duration)
    }

    #[must_use]
    pub fn kilograms(&self) -> f64 {
        f64::from(self.weight)
    }
}

/// Formulas of a concrete kind of training.
///
/// A bare [`Session`] has no calorie formula, so only the concrete variants implement this trait.
pub trait Workout {
    const CODE: WorkoutCode;
    const LABEL: &'static str;
    /// Distance covered by one step or stroke in meters.
    const STEP_LENGTH: f64 = 0.65;

    fn session(&self) -> &Session;

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.session().action) * Self::STEP_LENGTH / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().hours()
    }

    /// Spent energy in kcal.
    fn calories(&self) -> f64;

    fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: Self::LABEL.to_string(),
            duration: self.session().hours(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

#[derive(Debug, Clone, From, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! forward {
    ($self: ident, $training: ident => $expr: expr) => {
        match $self {
            Training::Running($training) => $expr,
            Training::SportsWalking($training) => $expr,
            Training::Swimming($training) => $expr,
        }
    };
}

impl Training {
    #[must_use]
    pub fn code(&self) -> WorkoutCode {
        match self {
            Training::Running(_) => Running::CODE,
            Training::SportsWalking(_) => SportsWalking::CODE,
            Training::Swimming(_) => Swimming::CODE,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Training::Running(_) => Running::LABEL,
            Training::SportsWalking(_) => SportsWalking::LABEL,
            Training::Swimming(_) => Swimming::LABEL,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        forward!(self, training => training.session())
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        forward!(self, training => training.distance())
    }

    #[must_use]
    pub fn mean_speed(&self) -> f64 {
        forward!(self, training => training.mean_speed())
    }

    #[must_use]
    pub fn calories(&self) -> f64 {
        forward!(self, training => training.calories())
    }

    #[must_use]
    pub fn summary(&self) -> InfoMessage {
        forward!(self, training => training.summary())
    }
}
