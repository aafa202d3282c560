use sprint_calendar::{CalendarOptions, ViewMode};
use serde_json::json;

#[test]
fn daygrid_options_match_widget_shape() {
    let options = CalendarOptions::for_mode(ViewMode::DayGrid);
    let value = serde_json::to_value(&options).unwrap();
    assert_eq!(
        value,
        json!({
            "editable": true,
            "navLinks": true,
            "selectable": true,
            "headerToolbar": {
                "left": "today prev,next",
                "center": "title",
                "right": "dayGridDay,dayGridWeek,dayGridMonth"
            },
            "initialDate": "2024-05-01",
            "initialView": "dayGridMonth"
        })
    );
}

#[test]
fn timeline_uses_its_own_toolbar_and_date() {
    let options = CalendarOptions::for_mode(ViewMode::Timeline);
    let toolbar = options.header_toolbar.unwrap();
    assert_eq!(toolbar.right, "timelineDay,timelineWeek,timelineMonth");
    assert_eq!(options.initial_date.as_deref(), Some("2023-07-01"));
    assert_eq!(options.initial_view, "timelineMonth");
}

#[test]
fn minimal_modes_omit_toolbar() {
    let timegrid = serde_json::to_value(CalendarOptions::for_mode(ViewMode::TimeGrid)).unwrap();
    assert!(timegrid.get("headerToolbar").is_none());
    assert!(timegrid.get("initialDate").is_none());
    assert_eq!(timegrid["initialView"], "timeGridWeek");

    let list = CalendarOptions::for_mode(ViewMode::List);
    assert_eq!(list.initial_date.as_deref(), Some("2024-05-01"));
    assert_eq!(list.initial_view, "listMonth");

    let multi = CalendarOptions::for_mode(ViewMode::MultiMonth);
    assert_eq!(multi.initial_view, "multiMonthYear");
}

#[test]
fn mode_names_parse_leniently() {
    assert_eq!("daygrid".parse::<ViewMode>().unwrap(), ViewMode::DayGrid);
    assert_eq!("Multi-Month".parse::<ViewMode>().unwrap(), ViewMode::MultiMonth);
    assert_eq!("time_grid".parse::<ViewMode>().unwrap(), ViewMode::TimeGrid);
    assert!("resource-timeline".parse::<ViewMode>().is_err());
    assert_eq!(ViewMode::default(), ViewMode::DayGrid);
}
