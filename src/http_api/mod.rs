use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    CalendarEvent, CalendarOptions, EventCache, InMemoryEventCache, ScheduleConfig,
    ScheduleError, ScheduleResult, ViewMode, WidgetState, apply_widget_state, events_for_render,
};

#[derive(Clone)]
pub struct AppState {
    generated: Arc<Vec<CalendarEvent>>,
    cache: Arc<dyn EventCache + Send + Sync>,
    mode: ViewMode,
}

impl AppState {
    pub fn new(config: &ScheduleConfig) -> ScheduleResult<Self> {
        let generated = config.generate()?;
        Ok(Self::with_cache(
            generated,
            Arc::new(InMemoryEventCache::new()),
            config.mode,
        ))
    }

    pub fn with_cache(
        generated: Vec<CalendarEvent>,
        cache: Arc<dyn EventCache + Send + Sync>,
        mode: ViewMode,
    ) -> Self {
        Self {
            generated: Arc::new(generated),
            cache,
            mode,
        }
    }

    fn current_events(&self) -> Vec<CalendarEvent> {
        events_for_render(self.cache.as_ref(), &self.generated)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String),
    Internal(String),
}

impl From<ScheduleError> for ApiError {
    fn from(value: ScheduleError) -> Self {
        match value {
            ScheduleError::MalformedInput(_)
            | ScheduleError::InvalidCadence(_)
            | ScheduleError::Serialization(_) => ApiError::Invalid(value.to_string()),
            ScheduleError::Csv(_) | ScheduleError::Io(_) => ApiError::Internal(value.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/events",
            get(list_events).put(replace_events).delete(reset_events),
        )
        .route("/state", post(apply_state))
        .route("/options", get(default_options))
        .route("/options/:mode", get(mode_options))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, config: ScheduleConfig) -> std::io::Result<()> {
    let state = AppState::new(&config)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "sprint calendar API listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_events(State(state): State<AppState>) -> Json<Vec<CalendarEvent>> {
    Json(state.current_events())
}

async fn replace_events(
    State(state): State<AppState>,
    Json(events): Json<Vec<CalendarEvent>>,
) -> Json<Vec<CalendarEvent>> {
    info!(events = events.len(), "replacing cached events");
    state.cache.set(events);
    Json(state.current_events())
}

async fn reset_events(State(state): State<AppState>) -> StatusCode {
    state.cache.clear();
    StatusCode::NO_CONTENT
}

async fn apply_state(
    State(state): State<AppState>,
    Json(widget): Json<WidgetState>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    apply_widget_state(state.cache.as_ref(), &widget)?;
    Ok(Json(state.current_events()))
}

async fn default_options(State(state): State<AppState>) -> Json<CalendarOptions> {
    Json(CalendarOptions::for_mode(state.mode))
}

async fn mode_options(Path(mode): Path<String>) -> Result<Json<CalendarOptions>, ApiError> {
    let mode: ViewMode = mode.parse().map_err(|err: crate::view::UnknownViewMode| {
        warn!(%err, "rejected options request");
        ApiError::Invalid(err.to_string())
    })?;
    Ok(Json(CalendarOptions::for_mode(mode)))
}
