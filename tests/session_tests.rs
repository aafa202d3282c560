use serde_json::json;
use sprint_calendar::{
    EventCache, EventTime, InMemoryEventCache, WidgetState, apply_widget_state,
    events_for_render, generate,
};

#[test]
fn render_falls_back_to_generated_events() {
    let cache = InMemoryEventCache::new();
    let generated = generate("2024-02-29", 14, 2).unwrap();
    assert_eq!(events_for_render(&cache, &generated), generated);
}

#[test]
fn widget_edits_replace_cached_list() {
    let cache = InMemoryEventCache::new();
    let generated = generate("2024-02-29", 14, 2).unwrap();

    let state: WidgetState = serde_json::from_value(json!({
        "view": { "type": "dayGridMonth" },
        "eventsSet": [
            {
                "title": "Sprint 5 (code)",
                "color": "#FFBD45",
                "start": "2024-03-01",
                "end": "2024-03-15",
                "allDay": true
            },
            {
                "title": "S. 5 (go/no-go)",
                "color": "#3DD56D",
                "start": "2024-03-21T14:00:00+01:00",
                "end": "2024-03-21T15:00:00+01:00"
            }
        ]
    }))
    .unwrap();

    assert!(apply_widget_state(&cache, &state).unwrap());
    let rendered = events_for_render(&cache, &generated);
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].start, "2024-03-01".parse::<EventTime>().unwrap());
    assert_eq!(
        rendered[1].start,
        "2024-03-21 14:00:00".parse::<EventTime>().unwrap()
    );
}

#[test]
fn state_without_events_leaves_cache_untouched() {
    let cache = InMemoryEventCache::new();
    let generated = generate("2024-02-29", 14, 1).unwrap();
    cache.set(generated[..1].to_vec());

    let state: WidgetState = serde_json::from_value(json!({ "callback": "dateClick" })).unwrap();
    assert!(!apply_widget_state(&cache, &state).unwrap());
    assert_eq!(cache.get().unwrap().len(), 1);
}

#[test]
fn unreadable_event_list_is_an_error() {
    let cache = InMemoryEventCache::new();
    let state: WidgetState =
        serde_json::from_value(json!({ "eventsSet": [{ "title": "x", "color": "#fff", "start": "soon", "end": "later" }] }))
            .unwrap();
    assert!(apply_widget_state(&cache, &state).is_err());
    assert!(cache.get().is_none());
}

#[test]
fn widget_state_round_trips_events() {
    let generated = generate("2024-02-29", 14, 1).unwrap();
    let state = WidgetState::with_events(&generated).unwrap();
    assert_eq!(state.events_set().unwrap(), Some(generated));
}
