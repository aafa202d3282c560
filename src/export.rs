use serde::Serialize;
use std::io::Write;

use crate::error::ScheduleResult;
use crate::event::{CalendarEvent, EventKind};

#[derive(Serialize)]
struct EventCsvRecord<'a> {
    title: &'a str,
    color: &'a str,
    kind: &'a str,
    start: String,
    end: String,
    all_day: bool,
}

impl<'a> From<&'a CalendarEvent> for EventCsvRecord<'a> {
    fn from(event: &'a CalendarEvent) -> Self {
        let kind = match event.kind() {
            Some(EventKind::EvenSprint | EventKind::OddSprint) => "sprint",
            Some(EventKind::Qa) => "qa",
            Some(EventKind::GoNoGo) => "go_no_go",
            None => "",
        };
        Self {
            title: &event.title,
            color: &event.color,
            kind,
            start: event.start.to_string(),
            end: event.end.to_string(),
            all_day: event.start.is_all_day(),
        }
    }
}

pub fn write_events_json<W: Write>(events: &[CalendarEvent], writer: W) -> ScheduleResult<()> {
    serde_json::to_writer_pretty(writer, events)?;
    Ok(())
}

pub fn write_events_csv<W: Write>(events: &[CalendarEvent], writer: W) -> ScheduleResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for event in events {
        writer.serialize(EventCsvRecord::from(event))?;
    }
    writer.flush()?;
    Ok(())
}
