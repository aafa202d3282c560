use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{ScheduleError, ScheduleResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The four kinds of event the sprint cadence produces, each tied to a fixed colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    EvenSprint,
    OddSprint,
    Qa,
    GoNoGo,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::EvenSprint,
        EventKind::OddSprint,
        EventKind::Qa,
        EventKind::GoNoGo,
    ];

    pub fn sprint_for_index(index: u32) -> Self {
        if index % 2 == 0 {
            EventKind::EvenSprint
        } else {
            EventKind::OddSprint
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            EventKind::EvenSprint => "#FF6C6C",
            EventKind::OddSprint => "#FFBD45",
            EventKind::Qa => "#3D9DF3",
            EventKind::GoNoGo => "#3DD56D",
        }
    }

    pub fn title(self, sprint_number: u32) -> String {
        match self {
            EventKind::EvenSprint | EventKind::OddSprint => format!("Sprint {sprint_number} (code)"),
            EventKind::Qa => format!("Sprint {sprint_number} (QA)"),
            EventKind::GoNoGo => format!("S. {sprint_number} (go/no-go)"),
        }
    }

    /// Recover the kind from a display colour, e.g. for events returned by the widget.
    pub fn from_color(color: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.color().eq_ignore_ascii_case(color.trim()))
    }
}

/// Either a whole day or a wall-clock instant; no timezone is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl EventTime {
    pub fn as_date_time(&self) -> NaiveDateTime {
        match self {
            EventTime::Date(date) => date.and_time(NaiveTime::MIN),
            EventTime::DateTime(dt) => *dt,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(date) => *date,
            EventTime::DateTime(dt) => dt.date(),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }

    /// Parse the forms the calendar widget may hand back: `YYYY-MM-DD`,
    /// `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 with an
    /// offset (the offset is dropped, keeping local wall time).
    pub fn parse(value: &str) -> ScheduleResult<Self> {
        let value = value.trim();
        if value.len() == 10 {
            return parse_strict_date(value).map(EventTime::Date);
        }
        for format in [DATE_TIME_FORMAT, "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(EventTime::DateTime(dt));
            }
        }
        DateTime::parse_from_rfc3339(value)
            .map(|dt| EventTime::DateTime(dt.naive_local()))
            .map_err(|_| ScheduleError::malformed(format!("unrecognised event time '{value}'")))
    }
}

// Ordered by instant; a whole day sorts before a midnight date-time on the same day.
impl Ord for EventTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_date_time()
            .cmp(&other.as_date_time())
            .then_with(|| other.is_all_day().cmp(&self.is_all_day()))
    }
}

impl PartialOrd for EventTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            EventTime::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_FORMAT)),
        }
    }
}

impl FromStr for EventTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventTime::parse(s)
    }
}

impl From<NaiveDate> for EventTime {
    fn from(value: NaiveDate) -> Self {
        EventTime::Date(value)
    }
}

impl From<NaiveDateTime> for EventTime {
    fn from(value: NaiveDateTime) -> Self {
        EventTime::DateTime(value)
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EventTime::parse(&raw).map_err(de::Error::custom)
    }
}

/// Strict `YYYY-MM-DD`: four digit year, two digit month and day.
pub fn parse_strict_date(value: &str) -> ScheduleResult<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(ScheduleError::malformed(format!(
            "'{value}' does not match YYYY-MM-DD"
        )));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| ScheduleError::malformed(format!("'{value}' is not a valid date: {err}")))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub color: String,
    pub start: EventTime,
    pub end: EventTime,
}

impl CalendarEvent {
    pub fn new(
        kind: EventKind,
        sprint_number: u32,
        start: impl Into<EventTime>,
        end: impl Into<EventTime>,
    ) -> Self {
        Self {
            title: kind.title(sprint_number),
            color: kind.color().to_string(),
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_color(&self.color)
    }

    pub fn duration(&self) -> Duration {
        self.end.as_date_time() - self.start.as_date_time()
    }
}
