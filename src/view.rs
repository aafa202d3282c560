use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    DayGrid,
    TimeGrid,
    Timeline,
    List,
    MultiMonth,
}

impl ViewMode {
    pub const ALL: [ViewMode; 5] = [
        ViewMode::DayGrid,
        ViewMode::TimeGrid,
        ViewMode::Timeline,
        ViewMode::List,
        ViewMode::MultiMonth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::DayGrid => "daygrid",
            ViewMode::TimeGrid => "timegrid",
            ViewMode::Timeline => "timeline",
            ViewMode::List => "list",
            ViewMode::MultiMonth => "multimonth",
        }
    }

    /// Widget view shown when the calendar first renders in this mode.
    pub fn initial_view(self) -> &'static str {
        match self {
            ViewMode::DayGrid => "dayGridMonth",
            ViewMode::TimeGrid => "timeGridWeek",
            ViewMode::Timeline => "timelineMonth",
            ViewMode::List => "listMonth",
            ViewMode::MultiMonth => "multiMonthYear",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewMode(pub String);

impl fmt::Display for UnknownViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown calendar mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| UnknownViewMode(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderToolbar {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl HeaderToolbar {
    fn navigation(right: &str) -> Self {
        Self {
            left: "today prev,next".to_string(),
            center: "title".to_string(),
            right: right.to_string(),
        }
    }
}

/// Flat option mapping handed to the calendar widget alongside the events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    pub editable: bool,
    pub nav_links: bool,
    pub selectable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_toolbar: Option<HeaderToolbar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    pub initial_view: String,
}

impl CalendarOptions {
    pub fn for_mode(mode: ViewMode) -> Self {
        let (header_toolbar, initial_date) = match mode {
            ViewMode::DayGrid => (
                Some(HeaderToolbar::navigation("dayGridDay,dayGridWeek,dayGridMonth")),
                Some("2024-05-01"),
            ),
            ViewMode::Timeline => (
                Some(HeaderToolbar::navigation(
                    "timelineDay,timelineWeek,timelineMonth",
                )),
                Some("2023-07-01"),
            ),
            ViewMode::List => (None, Some("2024-05-01")),
            ViewMode::TimeGrid | ViewMode::MultiMonth => (None, None),
        };

        Self {
            editable: true,
            nav_links: true,
            selectable: true,
            header_toolbar,
            initial_date: initial_date.map(str::to_string),
            initial_view: mode.initial_view().to_string(),
        }
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self::for_mode(ViewMode::default())
    }
}
