use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ScheduleResult;
use crate::event::CalendarEvent;

/// Key under which the widget reports an edited event list.
pub const EVENTS_SET_KEY: &str = "eventsSet";

/// Per-session slot holding the event list as last edited in the widget.
pub trait EventCache {
    fn get(&self) -> Option<Vec<CalendarEvent>>;
    fn set(&self, events: Vec<CalendarEvent>);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct InMemoryEventCache {
    events: RwLock<Option<Vec<CalendarEvent>>>,
}

impl InMemoryEventCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventCache for InMemoryEventCache {
    fn get(&self) -> Option<Vec<CalendarEvent>> {
        self.events.read().clone()
    }

    fn set(&self, events: Vec<CalendarEvent>) {
        *self.events.write() = Some(events);
    }

    fn clear(&self) {
        *self.events.write() = None;
    }
}

/// Interaction state returned by the calendar widget after a render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetState(pub Map<String, Value>);

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: &[CalendarEvent]) -> ScheduleResult<Self> {
        let mut map = Map::new();
        map.insert(EVENTS_SET_KEY.to_string(), serde_json::to_value(events)?);
        Ok(Self(map))
    }

    /// The edited event list, if the widget reported one. A `null` entry counts as absent.
    pub fn events_set(&self) -> ScheduleResult<Option<Vec<CalendarEvent>>> {
        match self.0.get(EVENTS_SET_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }
}

/// Events to render for this session: the cached edit if any, otherwise `generated`.
pub fn events_for_render<C: EventCache + ?Sized>(
    cache: &C,
    generated: &[CalendarEvent],
) -> Vec<CalendarEvent> {
    cache.get().unwrap_or_else(|| generated.to_vec())
}

/// Store the widget's edited list in the cache. Returns whether the cache changed.
pub fn apply_widget_state<C: EventCache + ?Sized>(
    cache: &C,
    state: &WidgetState,
) -> ScheduleResult<bool> {
    match state.events_set() {
        Ok(Some(events)) => {
            debug!(events = events.len(), "caching edited events from widget");
            cache.set(events);
            Ok(true)
        }
        Ok(None) => Ok(false),
        Err(err) => {
            warn!(error = %err, "widget returned an unreadable event list");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_events_set_is_ignored() {
        let cache = InMemoryEventCache::new();
        let state: WidgetState = serde_json::from_value(json!({ "eventsSet": null })).unwrap();
        assert!(!apply_widget_state(&cache, &state).unwrap());
        assert!(cache.get().is_none());
    }

    #[test]
    fn clear_drops_cached_events() {
        let cache = InMemoryEventCache::new();
        cache.set(Vec::new());
        assert!(cache.get().is_some());
        cache.clear();
        assert!(cache.get().is_none());
    }
}
