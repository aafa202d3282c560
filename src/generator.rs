use chrono::{Days, Duration, NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::{CalendarEvent, EventKind, parse_strict_date};

pub const DEFAULT_START_DATE: &str = "2024-02-29";
pub const DEFAULT_SPRINT_LENGTH_DAYS: u32 = 14;
pub const DEFAULT_ITERATION_COUNT: u32 = 49;

const MEETING_TIME: NaiveTime = match NaiveTime::from_hms_opt(10, 0, 0) {
    Some(time) => time,
    None => panic!("10:00:00 is a valid time"),
};

// Upfront reservation cap; longer schedules grow the vector as they go.
const MAX_RESERVED_SPRINTS: u32 = 1024;

/// Fixed offsets of the release cadence. Only `sprint_length_days` varies
/// between callers; the rest mirror how the team runs QA and go/no-go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintCadence {
    pub sprint_length_days: u32,
    pub qa_length_days: u32,
    pub sprint_number_offset: u32,
    pub meeting_time: NaiveTime,
    pub meeting_duration: Duration,
}

impl SprintCadence {
    pub fn new(sprint_length_days: u32) -> Self {
        Self {
            sprint_length_days,
            qa_length_days: 7,
            sprint_number_offset: 4,
            meeting_time: MEETING_TIME,
            meeting_duration: Duration::hours(1),
        }
    }

    fn validate(&self) -> ScheduleResult<()> {
        if self.sprint_length_days == 0 {
            return Err(ScheduleError::InvalidCadence(
                "sprint length must be at least one day".into(),
            ));
        }
        Ok(())
    }

    /// Events for a single 1-based sprint index: code span, QA span, go/no-go meeting.
    pub fn sprint_events(
        &self,
        start_date: NaiveDate,
        index: u32,
    ) -> ScheduleResult<[CalendarEvent; 3]> {
        let sprint_number = index
            .checked_add(self.sprint_number_offset)
            .ok_or_else(out_of_range)?;
        let offset = u64::from(index.saturating_sub(1)) * u64::from(self.sprint_length_days);

        let sprint_start = add_days(start_date, offset)?;
        let sprint_end = add_days(sprint_start, u64::from(self.sprint_length_days))?;
        let qa_end = add_days(sprint_end, u64::from(self.qa_length_days))?;

        // Meeting lands on the last day of QA.
        let meeting_day = qa_end.pred_opt().ok_or_else(out_of_range)?;
        let meeting_start = meeting_day.and_time(self.meeting_time);
        let meeting_end = meeting_start
            .checked_add_signed(self.meeting_duration)
            .ok_or_else(out_of_range)?;

        Ok([
            CalendarEvent::new(
                EventKind::sprint_for_index(index),
                sprint_number,
                sprint_start,
                sprint_end,
            ),
            CalendarEvent::new(EventKind::Qa, sprint_number, sprint_end, qa_end),
            CalendarEvent::new(EventKind::GoNoGo, sprint_number, meeting_start, meeting_end),
        ])
    }

    pub fn generate_from_date(
        &self,
        start_date: NaiveDate,
        iteration_count: u32,
    ) -> ScheduleResult<Vec<CalendarEvent>> {
        self.validate()?;
        if iteration_count > 0 {
            // The last sprint reaches furthest; fail before any allocation.
            self.sprint_events(start_date, iteration_count)?;
        }
        let reserved = iteration_count.min(MAX_RESERVED_SPRINTS) as usize * 3;
        let mut events = Vec::with_capacity(reserved);
        for index in 1..=iteration_count {
            events.extend(self.sprint_events(start_date, index)?);
        }
        debug!(
            %start_date,
            sprint_length_days = self.sprint_length_days,
            iteration_count,
            events = events.len(),
            "generated sprint schedule"
        );
        Ok(events)
    }
}

impl Default for SprintCadence {
    fn default() -> Self {
        Self::new(DEFAULT_SPRINT_LENGTH_DAYS)
    }
}

pub fn parse_start_date(value: &str) -> ScheduleResult<NaiveDate> {
    parse_strict_date(value)
}

/// Build the sprint schedule starting at `start_date` (`YYYY-MM-DD`).
///
/// Returns `3 * iteration_count` events in generation order. A malformed
/// start date fails before any event is produced.
pub fn generate(
    start_date: &str,
    sprint_length_days: u32,
    iteration_count: u32,
) -> ScheduleResult<Vec<CalendarEvent>> {
    let start = parse_start_date(start_date)?;
    generate_from_date(start, sprint_length_days, iteration_count)
}

pub fn generate_from_date(
    start_date: NaiveDate,
    sprint_length_days: u32,
    iteration_count: u32,
) -> ScheduleResult<Vec<CalendarEvent>> {
    SprintCadence::new(sprint_length_days).generate_from_date(start_date, iteration_count)
}

/// The schedule the calendar shows when nothing else is configured.
pub fn default_schedule() -> ScheduleResult<Vec<CalendarEvent>> {
    generate(
        DEFAULT_START_DATE,
        DEFAULT_SPRINT_LENGTH_DAYS,
        DEFAULT_ITERATION_COUNT,
    )
}

fn add_days(date: NaiveDate, days: u64) -> ScheduleResult<NaiveDate> {
    date.checked_add_days(Days::new(days)).ok_or_else(out_of_range)
}

fn out_of_range() -> ScheduleError {
    ScheduleError::InvalidCadence("schedule runs past the supported date range".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventTime;

    #[test]
    fn zero_length_sprint_is_rejected() {
        let err = generate("2024-02-29", 0, 3).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidCadence(_)));
    }

    #[test]
    fn zero_iterations_yield_no_events() {
        assert!(generate("2024-02-29", 14, 0).unwrap().is_empty());
    }

    #[test]
    fn single_sprint_events_use_offset_number() {
        let cadence = SprintCadence::default();
        let start = parse_start_date("2024-01-01").unwrap();
        let [code, qa, meeting] = cadence.sprint_events(start, 3).unwrap();
        assert_eq!(code.title, "Sprint 7 (code)");
        assert_eq!(code.color, "#FFBD45");
        assert_eq!(code.start, EventTime::Date(parse_start_date("2024-01-29").unwrap()));
        assert_eq!(qa.title, "Sprint 7 (QA)");
        assert_eq!(meeting.title, "S. 7 (go/no-go)");
    }

    #[test]
    fn huge_iteration_count_is_a_cadence_error() {
        let err = generate("2024-02-29", 14, u32::MAX).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidCadence(_)));
    }

    #[test]
    fn meeting_time_is_ten_o_clock() {
        let cadence = SprintCadence::default();
        assert_eq!(cadence.meeting_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn far_future_start_reports_range_error() {
        let start = NaiveDate::MAX.pred_opt().unwrap();
        assert!(generate_from_date(start, 14, 1).is_err());
    }
}
