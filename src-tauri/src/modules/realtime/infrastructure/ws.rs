use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::shared::errors::{AppError, AppResult};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
pub type WsMessage = Message;

/// One connection attempt against the realtime endpoint.
pub async fn connect(url: &str) -> AppResult<WsStream> {
    tracing::debug!("Opening realtime channel to {}", url);
    let (stream, _response) = connect_async(url)
        .await
        .map_err(|e| AppError::Realtime(format!("WebSocket connect failed: {}", e)))?;
    Ok(stream)
}
