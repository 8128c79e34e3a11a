/// Realtime channel events
///
/// The backend pushes `{type, data}` envelopes. Events never carry state
/// into the stores directly; they trigger an immediate refetch of the
/// affected lists and a notice to the webview.
use serde::{Deserialize, Serialize};
use specta::Type;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RealtimeEvent {
    NewWarehouseRequest(serde_json::Value),
    ShiftEndRequest(serde_json::Value),
    NewMessage(serde_json::Value),
    /// Unrecognized event kinds are kept so newer backends don't break
    /// older clients.
    Unknown { kind: String },
}

impl RealtimeEvent {
    pub fn parse(text: &str) -> AppResult<Self> {
        let envelope: Envelope = serde_json::from_str(text)
            .map_err(|e| AppError::Realtime(format!("Malformed envelope: {}", e)))?;

        Ok(match envelope.kind.as_str() {
            "new_warehouse_request" => RealtimeEvent::NewWarehouseRequest(envelope.data),
            "shift_end_request" => RealtimeEvent::ShiftEndRequest(envelope.data),
            "new_message" => RealtimeEvent::NewMessage(envelope.data),
            other => RealtimeEvent::Unknown {
                kind: other.to_string(),
            },
        })
    }

    pub fn kind_name(&self) -> &str {
        match self {
            RealtimeEvent::NewWarehouseRequest(_) => "new_warehouse_request",
            RealtimeEvent::ShiftEndRequest(_) => "shift_end_request",
            RealtimeEvent::NewMessage(_) => "new_message",
            RealtimeEvent::Unknown { kind } => kind,
        }
    }
}

/// Connectivity indicator shown in the corner of every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

/// Where incoming events and connectivity changes go. The app shell wires
/// this to the pollers and the webview event channel.
pub trait EventSink: Send + Sync {
    fn deliver(&self, event: &RealtimeEvent);

    fn status_changed(&self, _status: ConnectionStatus) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        let event = RealtimeEvent::parse(r#"{"type":"shift_end_request","data":{}}"#).unwrap();
        assert_eq!(event.kind_name(), "shift_end_request");

        let event = RealtimeEvent::parse(r#"{"type":"new_warehouse_request","data":{"id":"x"}}"#).unwrap();
        assert!(matches!(event, RealtimeEvent::NewWarehouseRequest(_)));
    }

    #[test]
    fn test_unknown_kind_is_tolerated() {
        let event = RealtimeEvent::parse(r#"{"type":"machine_alarm","data":null}"#).unwrap();
        assert!(matches!(event, RealtimeEvent::Unknown { .. }));
        assert_eq!(event.kind_name(), "machine_alarm");
    }

    #[test]
    fn test_missing_data_defaults_to_null() {
        let event = RealtimeEvent::parse(r#"{"type":"new_message"}"#).unwrap();
        assert_eq!(event, RealtimeEvent::NewMessage(serde_json::Value::Null));
    }

    #[test]
    fn test_malformed_envelope_is_an_error() {
        assert!(RealtimeEvent::parse("not json").is_err());
    }
}
