use std::str::FromStr;

use log::debug;
use strum::{Display, EnumIter, EnumString};

use crate::{
    Actions, Centimeters, Hours, Kilograms, Laps, Meters, ReadError, Running, Session,
    SportsWalking, Swimming, Training,
};

#[derive(Debug, Clone, Copy, Display, EnumIter, EnumString, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    #[strum(serialize = "SWM")]
    Swm,
    #[strum(serialize = "RUN")]
    Run,
    #[strum(serialize = "WLK")]
    Wlk,
}

impl WorkoutCode {
    /// Names of the values a package of this kind consists of, in order.
    #[must_use]
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Swm => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutCode::Run => &["action", "duration", "weight"],
            WorkoutCode::Wlk => &["action", "duration", "weight", "height"],
        }
    }

    #[must_use]
    pub fn arity(self) -> usize {
        self.fields().len()
    }

    pub fn build(self, data: &[f64]) -> Result<Training, ReadError> {
        match (self, data) {
            (WorkoutCode::Swm, &[action, duration, weight, length_pool, count_pool]) => {
                Ok(Swimming::new(
                    session(action, duration, weight)?,
                    Meters::from(length_pool),
                    Laps::from(integer("count_pool", count_pool)?),
                )
                .into())
            }
            (WorkoutCode::Run, &[action, duration, weight]) => {
                Ok(Running::new(session(action, duration, weight)?).into())
            }
            (WorkoutCode::Wlk, &[action, duration, weight, height]) => Ok(SportsWalking::new(
                session(action, duration, weight)?,
                Centimeters::new(height)?,
            )
            .into()),
            (code, _) => Err(ReadError::Arity {
                code,
                expected: code.arity(),
                actual: data.len(),
            }),
        }
    }
}

/// Raw readings of a sensor, identified by a workout code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package<'a> {
    pub code: &'a str,
    pub data: &'a [f64],
}

impl<'a> Package<'a> {
    #[must_use]
    pub const fn new(code: &'a str, data: &'a [f64]) -> Self {
        Self { code, data }
    }

    pub fn read(&self) -> Result<Training, ReadError> {
        read(self.code, self.data)
    }
}

/// Build the training described by a sensor package.
///
/// The values in `data` are taken positionally in the order given by [`WorkoutCode::fields`].
pub fn read(code: &str, data: &[f64]) -> Result<Training, ReadError> {
    let result = WorkoutCode::from_str(code)
        .map_err(|_| ReadError::UnknownCode(code.to_string()))
        .and_then(|workout_code| workout_code.build(data));
    match result {
        Ok(ref training) => debug!("read {code} package: {training:?}"),
        Err(ref err) => debug!("failed to read {code} package {data:?}: {err}"),
    }
    result
}

fn session(action: f64, duration: f64, weight: f64) -> Result<Session, ReadError> {
    Ok(Session::new(
        Actions::from(integer("action", action)?),
        Hours::new(duration)?,
        Kilograms::from(weight),
    ))
}

/// 2⁶³, the smallest float above the range of `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn integer(field: &'static str, value: f64) -> Result<i64, ReadError> {
    if value.fract() != 0.0 || !(-I64_LIMIT..I64_LIMIT).contains(&value) {
        return Err(ReadError::NotAnInteger { field, value });
    }

    #[allow(clippy::cast_possible_truncation)]
    Ok(value as i64)
}
