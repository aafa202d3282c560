pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod generator;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod session;
pub mod view;

pub use config::ScheduleConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use event::{CalendarEvent, EventKind, EventTime};
pub use export::{write_events_csv, write_events_json};
pub use generator::{
    SprintCadence, default_schedule, generate, generate_from_date, parse_start_date,
};
pub use session::{
    EventCache, InMemoryEventCache, WidgetState, apply_widget_state, events_for_render,
};
pub use view::{CalendarOptions, HeaderToolbar, ViewMode};
