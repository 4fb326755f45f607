#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod measure;
mod package;
mod report;
mod running;
mod sports_walking;
mod swimming;
mod training;

pub use error::ReadError;
pub use measure::{
    Actions, Centimeters, CentimetersError, Hours, HoursError, Kilograms, Laps, Meters,
};
pub use package::{Package, WorkoutCode, read};
pub use report::InfoMessage;
pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;
pub use training::{M_IN_KM, MIN_IN_H, Session, Training, Workout};
