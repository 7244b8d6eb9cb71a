//! One socket lifetime
//!
//! Pumps outbound frames into the sink, decodes inbound text frames, and
//! emits the keep-alive ping on a fixed interval. Returns when the socket
//! closes for any reason or stop is requested; retrying is the session
//! loop's job, never this module's.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Notify};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use tabletop_protocol::ClientMessage;

/// Why the socket lifetime ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SocketClosed {
    /// The peer closed, the transport errored, or a send failed.
    Remote,
    /// Stop was requested locally.
    Stopped,
}

/// Drive one established socket until it closes.
pub(crate) async fn drive_socket(
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    outbound: &mut mpsc::UnboundedReceiver<String>,
    ping_interval: Duration,
    stop: &Notify,
    mut on_frame: impl FnMut(&str),
) -> SocketClosed {
    let (mut write, mut read) = ws.split();

    // First ping one interval after open, not immediately.
    let mut ping = interval_at(Instant::now() + ping_interval, ping_interval);
    ping.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = stop.notified() => {
                let _ = write.send(Message::Close(None)).await;
                return SocketClosed::Stopped;
            }
            queued = outbound.recv() => {
                let Some(text) = queued else {
                    // Sender side replaced; treat as local teardown.
                    return SocketClosed::Stopped;
                };
                if let Err(e) = write.send(Message::Text(text)).await {
                    tracing::error!("Failed to send message: {}", e);
                    return SocketClosed::Remote;
                }
            }
            _ = ping.tick() => {
                // Fire-and-forget keep-alive; no acknowledgment is tracked.
                if let Ok(text) = serde_json::to_string(&ClientMessage::Ping) {
                    if let Err(e) = write.send(Message::Text(text)).await {
                        tracing::error!("Failed to send ping: {}", e);
                        return SocketClosed::Remote;
                    }
                }
            }
            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => on_frame(&text),
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!("Server closed connection");
                        return SocketClosed::Remote;
                    }
                    // Binary and control frames carry nothing we consume.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error: {}", e);
                        return SocketClosed::Remote;
                    }
                    None => return SocketClosed::Remote,
                }
            }
        }
    }
}
