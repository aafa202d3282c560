use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::CalendarEvent;
use crate::generator::{
    self, DEFAULT_ITERATION_COUNT, DEFAULT_SPRINT_LENGTH_DAYS, DEFAULT_START_DATE,
};
use crate::view::{CalendarOptions, ViewMode};

pub const ENV_START: &str = "SPRINT_CALENDAR_START";
pub const ENV_LENGTH: &str = "SPRINT_CALENDAR_LENGTH";
pub const ENV_ITERATIONS: &str = "SPRINT_CALENDAR_ITERATIONS";
pub const ENV_MODE: &str = "SPRINT_CALENDAR_MODE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub start_date: String,
    pub sprint_length_days: u32,
    pub iteration_count: u32,
    pub mode: ViewMode,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_date: DEFAULT_START_DATE.to_string(),
            sprint_length_days: DEFAULT_SPRINT_LENGTH_DAYS,
            iteration_count: DEFAULT_ITERATION_COUNT,
            mode: ViewMode::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let file = File::open(path.as_ref())?;
        let config: ScheduleConfig = serde_json::from_reader(file)?;
        info!(path = %path.as_ref().display(), "loaded schedule config");
        Ok(config)
    }

    /// Defaults overridden by `SPRINT_CALENDAR_*` variables from the process environment.
    pub fn from_env() -> ScheduleResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> ScheduleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(start) = lookup(ENV_START) {
            self.start_date = start;
        }
        if let Some(raw) = lookup(ENV_LENGTH) {
            self.sprint_length_days = parse_count(ENV_LENGTH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ITERATIONS) {
            self.iteration_count = parse_count(ENV_ITERATIONS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MODE) {
            self.mode = raw
                .parse()
                .map_err(|err| ScheduleError::malformed(format!("{ENV_MODE}: {err}")))?;
        }
        Ok(self)
    }

    pub fn generate(&self) -> ScheduleResult<Vec<CalendarEvent>> {
        generator::generate(
            &self.start_date,
            self.sprint_length_days,
            self.iteration_count,
        )
    }

    pub fn options(&self) -> CalendarOptions {
        CalendarOptions::for_mode(self.mode)
    }
}

fn parse_count(key: &str, raw: &str) -> ScheduleResult<u32> {
    raw.trim()
        .parse()
        .map_err(|_| ScheduleError::malformed(format!("{key} must be a non-negative integer, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn overrides_replace_defaults() {
        let vars = HashMap::from([
            (ENV_START, "2025-01-06"),
            (ENV_LENGTH, "10"),
            (ENV_MODE, "timeline"),
        ]);
        let config = ScheduleConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.start_date, "2025-01-06");
        assert_eq!(config.sprint_length_days, 10);
        assert_eq!(config.iteration_count, DEFAULT_ITERATION_COUNT);
        assert_eq!(config.mode, ViewMode::Timeline);
    }

    #[test]
    fn padded_start_override_fails_to_generate() {
        let config = ScheduleConfig::default()
            .with_overrides(|key| (key == ENV_START).then(|| " 2024-02-29 ".to_string()))
            .unwrap();
        assert!(config.generate().unwrap_err().is_malformed_input());
    }

    #[test]
    fn bad_numeric_override_is_malformed_input() {
        let err = ScheduleConfig::default()
            .with_overrides(|key| (key == ENV_ITERATIONS).then(|| "-3".to_string()))
            .unwrap_err();
        assert!(err.is_malformed_input());
    }
}
