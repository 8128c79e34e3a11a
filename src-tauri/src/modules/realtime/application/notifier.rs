//! The realtime notifier.
//!
//! Holds one WebSocket connection to the backend, parses `{type, data}`
//! envelopes, and hands every event to the [`EventSink`]. On any close or
//! error it reconnects with capped exponential backoff plus jitter, for as
//! long as the app runs; teardown is explicit via the cancellation token.
//! Channel failures stay silent apart from the connectivity indicator.

use futures::StreamExt;
use std::sync::{Arc, RwLock};
use tokio_util::sync::CancellationToken;

use crate::modules::realtime::domain::events::{ConnectionStatus, EventSink, RealtimeEvent};
use crate::modules::realtime::domain::reconnect::ReconnectPolicy;
use crate::modules::realtime::infrastructure::ws::{self, WsMessage, WsStream};
use crate::{log_debug, log_info, log_warn};

pub struct RealtimeNotifier {
    ws_url: String,
    policy: ReconnectPolicy,
    status: RwLock<ConnectionStatus>,
    sink: Arc<dyn EventSink>,
}

impl RealtimeNotifier {
    pub fn new(ws_url: impl Into<String>, sink: Arc<dyn EventSink>) -> Arc<Self> {
        Self::with_policy(ws_url, sink, ReconnectPolicy::default())
    }

    pub fn with_policy(
        ws_url: impl Into<String>,
        sink: Arc<dyn EventSink>,
        policy: ReconnectPolicy,
    ) -> Arc<Self> {
        Arc::new(Self {
            ws_url: ws_url.into(),
            policy,
            status: RwLock::new(ConnectionStatus::Disconnected),
            sink,
        })
    }

    pub fn status(&self) -> ConnectionStatus {
        *self.status.read().unwrap()
    }

    fn set_status(&self, status: ConnectionStatus) {
        let mut current = self.status.write().unwrap();
        if *current != status {
            *current = status;
            drop(current);
            self.sink.status_changed(status);
        }
    }

    /// Connection loop; runs until the token is cancelled.
    pub async fn run(self: Arc<Self>, cancel: CancellationToken) {
        let mut attempt: u32 = 0;

        while !cancel.is_cancelled() {
            self.set_status(ConnectionStatus::Connecting);

            match ws::connect(&self.ws_url).await {
                Ok(stream) => {
                    log_info!("Realtime channel connected");
                    attempt = 0;
                    self.set_status(ConnectionStatus::Connected);
                    self.read_until_closed(stream, &cancel).await;
                    self.set_status(ConnectionStatus::Disconnected);
                    log_debug!("Realtime channel closed");
                }
                Err(e) => {
                    self.set_status(ConnectionStatus::Disconnected);
                    log_debug!("Realtime connect attempt {} failed: {}", attempt + 1, e);
                }
            }

            if cancel.is_cancelled() {
                break;
            }

            let delay = self.policy.jittered_delay_for(attempt);
            attempt = attempt.saturating_add(1);
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        self.set_status(ConnectionStatus::Disconnected);
        log_info!("Realtime notifier torn down");
    }

    async fn read_until_closed(&self, mut stream: WsStream, cancel: &CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                message = stream.next() => match message {
                    Some(Ok(WsMessage::Text(text))) => match RealtimeEvent::parse(&text) {
                        Ok(event) => {
                            log_debug!("Realtime event: {}", event.kind_name());
                            self.sink.deliver(&event);
                        }
                        Err(e) => log_warn!("Dropping unreadable realtime message: {}", e),
                    },
                    Some(Ok(WsMessage::Close(_))) | None => break,
                    Some(Ok(_)) => {} // ping/pong/binary: nothing to do
                    Some(Err(e)) => {
                        log_debug!("Realtime read error: {}", e);
                        break;
                    }
                }
            }
        }
    }
}
