#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use sprint_calendar::{ScheduleConfig, http_api};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sprint_calendar=info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("SPRINT_CALENDAR_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let config = match std::env::args().nth(1) {
        Some(path) => ScheduleConfig::from_json_file(path)?,
        None => ScheduleConfig::from_env()?,
    };

    println!("sprint-calendar HTTP API listening on http://{addr}");
    http_api::serve(addr, config).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
