use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ScheduleError {
    MalformedInput(String),
    InvalidCadence(String),
    Serialization(SerdeJsonError),
    Csv(csv::Error),
    Io(io::Error),
}

impl ScheduleError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ScheduleError::MalformedInput(_))
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            ScheduleError::InvalidCadence(msg) => write!(f, "invalid cadence: {msg}"),
            ScheduleError::Serialization(err) => write!(f, "serialization error: {err}"),
            ScheduleError::Csv(err) => write!(f, "csv error: {err}"),
            ScheduleError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Serialization(err) => Some(err),
            ScheduleError::Csv(err) => Some(err),
            ScheduleError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SerdeJsonError> for ScheduleError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<csv::Error> for ScheduleError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<io::Error> for ScheduleError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
