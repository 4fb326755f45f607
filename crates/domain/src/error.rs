use crate::{CentimetersError, HoursError, WorkoutCode};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ReadError {
    #[error("Unknown workout code: {0}")]
    UnknownCode(String),
    #[error(
        "{code} expects {expected} values ({}), got {actual}",
        .code.fields().join(", ")
    )]
    Arity {
        code: WorkoutCode,
        expected: usize,
        actual: usize,
    },
    #[error("{field} must be an integer, got {value}")]
    NotAnInteger { field: &'static str, value: f64 },
    #[error(transparent)]
    Duration(#[from] HoursError),
    #[error(transparent)]
    Height(#[from] CentimetersError),
}
