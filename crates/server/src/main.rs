// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;

use axum::{
    Json, Router,
    extract::{FromRef, Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use inn_registration::FormController;
use inn_registration_api::{
    AddSecondaryGuestResponse, ApiError, FormResponse, RemoveSecondaryGuestResponse,
    SubmitRegistrationResponse, UpdateFieldRequest, UpdateFileRequest, UpdateGuestFieldRequest,
    UpdateGuestFileRequest, ValidationErrorsResponse, add_secondary_guest, complete_submission,
    get_registration, get_validation_errors, open_registration, remove_secondary_guest,
    reset_registration, submit_registration, update_field, update_file,
    update_secondary_guest_field, update_secondary_guest_file, validate_registration,
};
use inn_registration_domain::{DEFAULT_BOOKING_PREFIX, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};

/// Inn Registration Server - HTTP server for guest registration forms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// How long a submission stays in flight before it completes, in milliseconds
    #[arg(long, default_value_t = 2000)]
    submission_latency_ms: u64,

    /// Prefix for generated booking references
    #[arg(long, default_value = DEFAULT_BOOKING_PREFIX)]
    booking_prefix: String,
}

/// Settings shared by every request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ServerConfig {
    /// Delay between an accepted submit and its completion.
    submission_latency: Duration,
    /// Prefix for generated booking references.
    booking_prefix: String,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            submission_latency: Duration::from_millis(args.submission_latency_ms),
            booking_prefix: args.booking_prefix.clone(),
        }
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("Invalid bind address '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Open registration forms, keyed by registration id.
type Sessions = HashMap<String, FormController>;

/// Application state shared across handlers.
///
/// Each request locks the session map for the duration of one command, so
/// commands on a registration are applied one at a time.
#[derive(Clone)]
struct AppState {
    sessions: Arc<Mutex<Sessions>>,
    config: Arc<ServerConfig>,
    broadcaster: Arc<LiveEventBroadcaster>,
}

impl AppState {
    fn new(config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
            broadcaster: Arc::new(LiveEventBroadcaster::new()),
        }
    }
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.broadcaster)
    }
}

/// API response for a newly opened registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenRegistrationApiResponse {
    /// Identifier used in every later request for this registration.
    registration_id: String,
    #[serde(flatten)]
    form: FormResponse,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Every failing field, when a submit was refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<ValidationErrors>,
}

impl HttpError {
    fn registration_not_found(registration_id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("Registration '{registration_id}' does not exist"),
            errors: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            errors: self.errors,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message,
                errors: None,
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message,
                errors: None,
            },
            ApiError::InvalidState { .. } => Self {
                status: StatusCode::CONFLICT,
                message,
                errors: None,
            },
            ApiError::ValidationFailed { errors } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message,
                errors: Some(errors),
            },
        }
    }
}

fn session_mut<'a>(
    sessions: &'a mut Sessions,
    registration_id: &str,
) -> Result<&'a mut FormController, HttpError> {
    sessions
        .get_mut(registration_id)
        .ok_or_else(|| HttpError::registration_not_found(registration_id))
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn now_millis() -> u64 {
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    u64::try_from(millis).unwrap_or_default()
}

fn generate_registration_id(sessions: &Sessions) -> String {
    loop {
        let candidate: String = format!("{:016x}", rand::random::<u64>());
        if !sessions.contains_key(&candidate) {
            return candidate;
        }
    }
}

/// Completes a submission once the configured latency has elapsed.
///
/// The task is never cancelled; edits made while it waits are kept.
fn schedule_completion(app_state: AppState, registration_id: String) {
    tokio::spawn(async move {
        tokio::time::sleep(app_state.config.submission_latency).await;

        let booking_reference: String = {
            let mut sessions = app_state.sessions.lock().await;
            let Some(controller) = sessions.get_mut(&registration_id) else {
                warn!(
                    registration_id = %registration_id,
                    "Registration disappeared before its submission completed"
                );
                return;
            };
            match complete_submission(controller) {
                Ok(booking_reference) => booking_reference,
                Err(err) => {
                    error!(
                        registration_id = %registration_id,
                        error = %err,
                        "Failed to complete submission"
                    );
                    return;
                }
            }
        };

        app_state.broadcaster.broadcast(&LiveEvent::SubmissionCompleted {
            registration_id,
            booking_reference,
        });
    });
}

/// Handler for POST `/registrations` endpoint.
///
/// Opens a new registration form.
async fn handle_open_registration(
    AxumState(app_state): AxumState<AppState>,
) -> (StatusCode, Json<OpenRegistrationApiResponse>) {
    let (controller, form): (FormController, FormResponse) =
        open_registration(today(), &app_state.config.booking_prefix);

    let registration_id: String = {
        let mut sessions = app_state.sessions.lock().await;
        let registration_id: String = generate_registration_id(&sessions);
        sessions.insert(registration_id.clone(), controller);
        registration_id
    };

    info!(registration_id = %registration_id, "Opened registration");
    (
        StatusCode::CREATED,
        Json(OpenRegistrationApiResponse {
            registration_id,
            form,
        }),
    )
}

/// Handler for GET `/registrations/{registration_id}` endpoint.
async fn handle_get_registration(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<FormResponse>, HttpError> {
    info!(registration_id = %registration_id, "Handling get_registration request");

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(get_registration(controller)))
}

/// Handler for DELETE `/registrations/{registration_id}` endpoint.
///
/// Closes the registration and frees its form. A pending submission for it
/// is dropped when its timer fires.
async fn handle_close_registration(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    info!(registration_id = %registration_id, "Handling close_registration request");

    let removed: Option<FormController> = {
        let mut sessions = app_state.sessions.lock().await;
        sessions.remove(&registration_id)
    };
    if removed.is_none() {
        return Err(HttpError::registration_not_found(&registration_id));
    }

    app_state
        .broadcaster
        .broadcast(&LiveEvent::RegistrationClosed { registration_id });

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/registrations/{registration_id}/fields` endpoint.
async fn handle_update_field(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
    Json(req): Json<UpdateFieldRequest>,
) -> Result<Json<FormResponse>, HttpError> {
    info!(
        registration_id = %registration_id,
        field = %req.field,
        "Handling update_field request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(update_field(controller, req)?))
}

/// Handler for POST `/registrations/{registration_id}/files` endpoint.
async fn handle_update_file(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
    Json(req): Json<UpdateFileRequest>,
) -> Result<Json<FormResponse>, HttpError> {
    info!(
        registration_id = %registration_id,
        field = %req.field,
        files = req.files.len(),
        "Handling update_file request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(update_file(controller, req)?))
}

/// Handler for POST `/registrations/{registration_id}/guests` endpoint.
async fn handle_add_secondary_guest(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<AddSecondaryGuestResponse>, HttpError> {
    info!(registration_id = %registration_id, "Handling add_secondary_guest request");

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(add_secondary_guest(controller)?))
}

/// Handler for DELETE `/registrations/{registration_id}/guests/{index}` endpoint.
async fn handle_remove_secondary_guest(
    AxumState(app_state): AxumState<AppState>,
    Path((registration_id, index)): Path<(String, usize)>,
) -> Result<Json<RemoveSecondaryGuestResponse>, HttpError> {
    info!(
        registration_id = %registration_id,
        index,
        "Handling remove_secondary_guest request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(remove_secondary_guest(controller, index)?))
}

/// Handler for POST `/registrations/{registration_id}/guests/{index}/fields` endpoint.
async fn handle_update_secondary_guest_field(
    AxumState(app_state): AxumState<AppState>,
    Path((registration_id, index)): Path<(String, usize)>,
    Json(req): Json<UpdateGuestFieldRequest>,
) -> Result<Json<FormResponse>, HttpError> {
    info!(
        registration_id = %registration_id,
        index,
        field = %req.field,
        "Handling update_secondary_guest_field request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(update_secondary_guest_field(controller, index, req)?))
}

/// Handler for POST `/registrations/{registration_id}/guests/{index}/files` endpoint.
async fn handle_update_secondary_guest_file(
    AxumState(app_state): AxumState<AppState>,
    Path((registration_id, index)): Path<(String, usize)>,
    Json(req): Json<UpdateGuestFileRequest>,
) -> Result<Json<FormResponse>, HttpError> {
    info!(
        registration_id = %registration_id,
        index,
        field = %req.field,
        files = req.files.len(),
        "Handling update_secondary_guest_file request"
    );

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(update_secondary_guest_file(controller, index, req)?))
}

/// Handler for POST `/registrations/{registration_id}/submit` endpoint.
///
/// Starts the submission and schedules its completion.
async fn handle_submit_registration(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<SubmitRegistrationResponse>, HttpError> {
    info!(registration_id = %registration_id, "Handling submit_registration request");

    let response: SubmitRegistrationResponse = {
        let mut sessions = app_state.sessions.lock().await;
        let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
        submit_registration(controller, now_millis())?
    };

    app_state.broadcaster.broadcast(&LiveEvent::SubmissionStarted {
        registration_id: registration_id.clone(),
        booking_reference: response.booking_reference.clone(),
    });
    schedule_completion(app_state, registration_id);

    Ok(Json(response))
}

/// Handler for POST `/registrations/{registration_id}/reset` endpoint.
async fn handle_reset_registration(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<FormResponse>, HttpError> {
    info!(registration_id = %registration_id, "Handling reset_registration request");

    let response: FormResponse = {
        let mut sessions = app_state.sessions.lock().await;
        let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
        reset_registration(controller, today())?
    };

    app_state
        .broadcaster
        .broadcast(&LiveEvent::RegistrationReset { registration_id });

    Ok(Json(response))
}

/// Handler for GET `/registrations/{registration_id}/errors` endpoint.
///
/// Returns the errors recorded by the last failed submit.
async fn handle_get_validation_errors(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<ValidationErrorsResponse>, HttpError> {
    info!(registration_id = %registration_id, "Handling get_validation_errors request");

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(get_validation_errors(controller)))
}

/// Handler for GET `/registrations/{registration_id}/validation` endpoint.
///
/// Checks the current draft without recording the result.
async fn handle_validate_registration(
    AxumState(app_state): AxumState<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<ValidationErrorsResponse>, HttpError> {
    info!(registration_id = %registration_id, "Handling validate_registration request");

    let mut sessions = app_state.sessions.lock().await;
    let controller: &mut FormController = session_mut(&mut sessions, &registration_id)?;
    Ok(Json(validate_registration(controller)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/registrations", post(handle_open_registration))
        .route(
            "/registrations/{registration_id}",
            get(handle_get_registration).delete(handle_close_registration),
        )
        .route(
            "/registrations/{registration_id}/fields",
            post(handle_update_field),
        )
        .route(
            "/registrations/{registration_id}/files",
            post(handle_update_file),
        )
        .route(
            "/registrations/{registration_id}/guests",
            post(handle_add_secondary_guest),
        )
        .route(
            "/registrations/{registration_id}/guests/{index}",
            delete(handle_remove_secondary_guest),
        )
        .route(
            "/registrations/{registration_id}/guests/{index}/fields",
            post(handle_update_secondary_guest_field),
        )
        .route(
            "/registrations/{registration_id}/guests/{index}/files",
            post(handle_update_secondary_guest_file),
        )
        .route(
            "/registrations/{registration_id}/submit",
            post(handle_submit_registration),
        )
        .route(
            "/registrations/{registration_id}/reset",
            post(handle_reset_registration),
        )
        .route(
            "/registrations/{registration_id}/errors",
            get(handle_get_validation_errors),
        )
        .route(
            "/registrations/{registration_id}/validation",
            get(handle_validate_registration),
        )
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Inn Registration Server");

    let config: ServerConfig = ServerConfig::from(&args);
    info!(
        submission_latency_ms = args.submission_latency_ms,
        booking_prefix = %config.booking_prefix,
        "Loaded configuration"
    );

    let app: Router = build_router(AppState::new(config));

    let address: String = format!("{}:{}", args.bind, args.port);
    let addr: SocketAddr = address
        .parse()
        .map_err(|source| ServerError::InvalidAddress { address, source })?;

    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}
