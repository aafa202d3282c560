use sprint_calendar::{
    CalendarEvent, CalendarOptions, ScheduleConfig, ViewMode, parse_start_date, write_events_csv,
    write_events_json,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn render_events_as_text_table(events: &[CalendarEvent]) -> String {
    let headers = ["#", "title", "color", "start", "end"];
    let rows: Vec<[String; 5]> = events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            [
                (idx + 1).to_string(),
                event.title.clone(),
                event.color.clone(),
                event.start.to_string(),
                event.end.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |cells: &[&str]| {
        let mut line = String::from("|");
        for (ci, cell) in cells.iter().enumerate() {
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[ci].saturating_sub(cell.len())));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&headers));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&render_row(&cells));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                       Show this help\n  show                       Show the current event list\n  sprint <number>            Show the events of one sprint (e.g. 5)\n  json                       Print events as JSON\n  csv                        Print events as CSV\n  config                     Show generator settings\n  start <YYYY-MM-DD>         Set the first sprint's start date\n  length <days>              Set the sprint length in days\n  count <n>                  Set the number of sprints\n  mode <name>                Set calendar mode (daygrid, timegrid, timeline, list, multimonth)\n  options [mode]             Print widget options for a mode\n  quit|exit                  Exit"
    );
}

fn print_config(config: &ScheduleConfig) {
    println!("Start date         : {}", config.start_date);
    println!("Sprint length days : {}", config.sprint_length_days);
    println!("Iterations         : {}", config.iteration_count);
    println!("Calendar mode      : {}", config.mode);
}

fn regenerate(config: &ScheduleConfig, events: &mut Vec<CalendarEvent>) -> bool {
    match config.generate() {
        Ok(generated) => {
            *events = generated;
            println!("Generated {} events.", events.len());
            true
        }
        Err(e) => {
            println!("Error: {}", e);
            false
        }
    }
}

fn print_options(options: &CalendarOptions) {
    match serde_json::to_string_pretty(options) {
        Ok(text) => println!("{text}"),
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut config = match ScheduleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Ignoring environment overrides: {}", e);
            ScheduleConfig::default()
        }
    };
    let mut events = Vec::new();

    println!("Sprint Calendar (CLI) - type 'help' for commands\n");
    regenerate(&config, &mut events);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => println!("{}", render_events_as_text_table(&events)),
            "sprint" => match parts.next().map(str::parse::<u32>) {
                Some(Ok(number)) => {
                    let label = format!(" {number} (");
                    let matching: Vec<CalendarEvent> = events
                        .iter()
                        .filter(|event| event.title.contains(&label))
                        .cloned()
                        .collect();
                    if matching.is_empty() {
                        println!("Sprint {number} not found.");
                    } else {
                        println!("{}", render_events_as_text_table(&matching));
                    }
                }
                Some(Err(_)) => println!("Invalid sprint number"),
                None => println!("Usage: sprint <number>"),
            },
            "json" => {
                let stdout = io::stdout();
                match write_events_json(&events, stdout.lock()) {
                    Ok(()) => println!(),
                    Err(e) => println!("Error: {}", e),
                }
            }
            "csv" => {
                let stdout = io::stdout();
                if let Err(e) = write_events_csv(&events, stdout.lock()) {
                    println!("Error: {}", e);
                }
            }
            "config" => print_config(&config),
            "start" => match parts.next() {
                Some(date_s) => match parse_start_date(date_s) {
                    Ok(_) => {
                        let previous = std::mem::replace(&mut config.start_date, date_s.to_string());
                        if !regenerate(&config, &mut events) {
                            config.start_date = previous;
                        }
                    }
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: start <YYYY-MM-DD>"),
            },
            "length" | "count" => match parts.next().map(str::parse::<u32>) {
                Some(Ok(value)) => {
                    let previous = config.clone();
                    if cmd == "length" {
                        config.sprint_length_days = value;
                    } else {
                        config.iteration_count = value;
                    }
                    if !regenerate(&config, &mut events) {
                        config = previous;
                    }
                }
                Some(Err(_)) => println!("Invalid number"),
                None => println!("Usage: {} <n>", cmd),
            },
            "mode" => match parts.next().map(str::parse::<ViewMode>) {
                Some(Ok(mode)) => {
                    config.mode = mode;
                    println!("Calendar mode set to {mode}.");
                }
                Some(Err(e)) => println!("Error: {}", e),
                None => println!("Usage: mode <name>"),
            },
            "options" => match parts.next().map(str::parse::<ViewMode>) {
                Some(Ok(mode)) => print_options(&CalendarOptions::for_mode(mode)),
                Some(Err(e)) => println!("Error: {}", e),
                None => print_options(&config.options()),
            },
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
