// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Phase notifications for front-desk displays.
//!
//! A submission completes on a server-side timer, so a desk showing
//! "Submitting..." has no request of its own that returns when the booking
//! reference is ready. It opens `/live?registration_id=<id>` instead and
//! switches to the success view on `submission_completed`. Without the query
//! parameter every registration's events are streamed. Events only announce
//! phase changes; the registration itself is read over HTTP.

use axum::{
    extract::{
        Query, State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{OffsetDateTime, format_description::well_known::Iso8601};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, error, info, warn};

/// Events kept for a display that falls behind before it starts skipping.
const EVENT_BUFFER_SIZE: usize = 100;

/// A phase change on one registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A registration passed validation and is being submitted.
    SubmissionStarted {
        /// The registration session.
        registration_id: String,
        /// The reference the guest will be given.
        booking_reference: String,
    },
    /// A submission finished; the guest can be shown the reference.
    SubmissionCompleted {
        /// The registration session.
        registration_id: String,
        /// The reference shown to the guest.
        booking_reference: String,
    },
    /// A completed registration was cleared for the next guest.
    RegistrationReset {
        /// The registration session.
        registration_id: String,
    },
    /// The registration was closed and its form discarded.
    RegistrationClosed {
        /// The registration session.
        registration_id: String,
    },
    /// First message on every stream.
    Connected {
        /// Server time, ISO 8601.
        timestamp: String,
    },
}

impl LiveEvent {
    /// Returns the registration the event is about, if any.
    #[must_use]
    pub fn registration_id(&self) -> Option<&str> {
        match self {
            Self::SubmissionStarted {
                registration_id, ..
            }
            | Self::SubmissionCompleted {
                registration_id, ..
            }
            | Self::RegistrationReset { registration_id }
            | Self::RegistrationClosed { registration_id } => Some(registration_id.as_str()),
            Self::Connected { .. } => None,
        }
    }
}

/// Query parameters accepted by `/live`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveFilter {
    /// Only stream events for this registration.
    pub registration_id: Option<String>,
}

impl LiveFilter {
    /// Returns whether a display using this filter should see `event`.
    #[must_use]
    pub fn admits(&self, event: &LiveEvent) -> bool {
        match (self.registration_id.as_deref(), event.registration_id()) {
            (Some(wanted), Some(about)) => wanted == about,
            _ => true,
        }
    }
}

/// Hands phase events to every connected display.
#[derive(Clone)]
pub struct LiveEventBroadcaster {
    tx: broadcast::Sender<LiveEvent>,
}

impl LiveEventBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Sends `event` to every subscriber. Dropped when nobody is listening.
    pub fn broadcast(&self, event: &LiveEvent) {
        let receivers: usize = self.tx.send(event.clone()).unwrap_or_default();
        debug!(?event, receivers, "Broadcast live event");
    }

    /// Subscribes to events sent from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for LiveEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for GET `/live`.
///
/// # Arguments
///
/// * `ws` - WebSocket upgrade request
/// * `filter` - Optional registration to follow
/// * `broadcaster` - The live event broadcaster from application state
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    Query(filter): Query<LiveFilter>,
    AxumState(broadcaster): AxumState<Arc<LiveEventBroadcaster>>,
) -> Response {
    let events: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();
    ws.on_upgrade(move |socket| stream_events(socket, events, filter))
}

async fn stream_events(
    mut socket: WebSocket,
    mut events: broadcast::Receiver<LiveEvent>,
    filter: LiveFilter,
) {
    info!(registration_id = ?filter.registration_id, "Display connected to live events");

    let connected: LiveEvent = LiveEvent::Connected {
        timestamp: OffsetDateTime::now_utc()
            .format(&Iso8601::DEFAULT)
            .unwrap_or_default(),
    };
    if send_event(&mut socket, &connected).await.is_err() {
        warn!("Display went away before the connection was confirmed");
        return;
    }

    loop {
        tokio::select! {
            received = events.recv() => match received {
                Ok(event) => {
                    if filter.admits(&event) && send_event(&mut socket, &event).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Display fell behind; live events skipped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                None | Some(Err(_) | Ok(Message::Close(_))) => break,
                // Displays only listen.
                Some(Ok(_)) => {}
            },
        }
    }

    info!(registration_id = ?filter.registration_id, "Display disconnected from live events");
}

async fn send_event(socket: &mut WebSocket, event: &LiveEvent) -> Result<(), axum::Error> {
    match serde_json::to_string(event) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(e) => {
            error!(?e, "Failed to serialize live event");
            Ok(())
        }
    }
}
