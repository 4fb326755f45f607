use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Actions(i64);

impl From<i64> for Actions {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Actions> for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Actions) -> Self {
        value.0 as f64
    }
}

/// Duration of a training session.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Hours(f64);

impl Hours {
    pub fn new(value: f64) -> Result<Self, HoursError> {
        if value == 0.0 {
            return Err(HoursError::Zero);
        }

        Ok(Self(value))
    }
}

impl TryFrom<f64> for Hours {
    type Error = HoursError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Hours::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HoursError {
    #[error("Duration must not be 0 h")]
    Zero,
}

/// Body weight of the athlete.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Kilograms(f64);

impl From<f64> for Kilograms {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Body height of the athlete.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Centimeters(f64);

impl Centimeters {
    pub fn new(value: f64) -> Result<Self, CentimetersError> {
        if value == 0.0 {
            return Err(CentimetersError::Zero);
        }

        Ok(Self(value))
    }
}

impl TryFrom<f64> for Centimeters {
    type Error = CentimetersError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Centimeters::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CentimetersError {
    #[error("Height must not be 0 cm")]
    Zero,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Meters(f64);

impl From<f64> for Meters {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Number of pool lengths swum.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Laps(i64);

impl From<i64> for Laps {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Laps> for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Laps) -> Self {
        value.0 as f64
    }
}
