//! Game session with explicit lifecycle
//!
//! One [`GameSession`] owns one WebSocket at a time: construct a config,
//! [`GameSession::spawn`] the task, consume events, [`SessionHandle::stop`]
//! when done. There are no ambient sockets or timers; everything is a field
//! of the session and dies with it.
//!
//! The spawned loop reconnects forever: Connecting, Connected (join sent,
//! retry counter reset), socket runs until close, Reconnecting for the
//! backoff delay, and around again. Stop cancels whichever of those the
//! task is currently in.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio_tungstenite::connect_async;
use url::Url;

use tabletop_protocol::{ClientMessage, MoveIntent, Orientation, PlayerSlot};

use crate::backoff::{ReconnectPolicy, DEFAULT_BASE_DELAY, DEFAULT_MAX_DELAY};
use crate::connection::{ConnectionState, SharedConnectionState};
use crate::event::SessionEvent;
use crate::gate::{check_move, MoveDecision};
use crate::identity::IdentityService;
use crate::storage::StorageProvider;
use crate::sync::{self, GameView};
use crate::transport::{self, SocketClosed};

/// Default keep-alive interval.
pub const DEFAULT_PING_INTERVAL: Duration = Duration::from_secs(30);

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Full WebSocket endpoint, e.g. `ws://host/ws/dots-and-boxes`.
    pub endpoint: Url,
    pub base_retry_delay: Duration,
    pub max_retry_delay: Duration,
    pub ping_interval: Duration,
}

impl SessionConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            base_retry_delay: DEFAULT_BASE_DELAY,
            max_retry_delay: DEFAULT_MAX_DELAY,
            ping_interval: DEFAULT_PING_INTERVAL,
        }
    }
}

/// State shared between the session task and its handles.
struct Shared {
    state: SharedConnectionState,
    view: RwLock<GameView>,
    identity: IdentityService,
    /// Sender into the live socket, present only while one exists.
    outbound: Mutex<Option<mpsc::UnboundedSender<String>>>,
    stopped: AtomicBool,
    stop_notify: Notify,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl Shared {
    fn set_state(&self, state: ConnectionState) {
        if self.state.get() != state {
            self.state.set(state);
            let _ = self.events.send(SessionEvent::StateChanged(state));
        }
    }

    fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Hand a serialized frame to the live socket, if there is one.
    fn send_raw(&self, text: String) -> bool {
        let tx = match self.outbound.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        };
        match tx {
            Some(tx) => tx.send(text).is_ok(),
            None => false,
        }
    }

    fn send_client(&self, message: &ClientMessage) -> bool {
        match serde_json::to_string(message) {
            Ok(text) => self.send_raw(text),
            Err(e) => {
                tracing::error!("Failed to serialize client message: {}", e);
                false
            }
        }
    }

    fn handle_frame(&self, text: &str) {
        let events = match self.view.write() {
            Ok(mut view) => sync::apply_frame(&mut view, &self.identity, text),
            Err(_) => return,
        };
        for event in events {
            self.emit(event);
        }
    }
}

/// The owning session object. Spawning returns a cloneable handle plus the
/// event stream; the task runs until [`SessionHandle::stop`].
pub struct GameSession;

impl GameSession {
    /// Spawn the session task. Must be called within a tokio runtime.
    pub fn spawn(
        config: SessionConfig,
        storage: Arc<dyn StorageProvider>,
    ) -> (SessionHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            state: SharedConnectionState::new(),
            view: RwLock::new(GameView::default()),
            identity: IdentityService::new(storage),
            outbound: Mutex::new(None),
            stopped: AtomicBool::new(false),
            stop_notify: Notify::new(),
            events: events_tx,
        });

        let handle = SessionHandle {
            shared: Arc::clone(&shared),
        };
        tokio::spawn(run_loop(shared, config));

        (handle, events_rx)
    }
}

/// Cloneable handle onto a running session.
#[derive(Clone)]
pub struct SessionHandle {
    shared: Arc<Shared>,
}

impl SessionHandle {
    pub fn state(&self) -> ConnectionState {
        self.shared.state.get()
    }

    /// A clone of the current local view of game state.
    pub fn view(&self) -> GameView {
        self.shared
            .view
            .read()
            .map(|view| view.clone())
            .unwrap_or_default()
    }

    /// The locally-bound player slot.
    pub fn local_slot(&self) -> PlayerSlot {
        self.shared.identity.current()
    }

    /// Gate and, if admitted, transmit an edge selection.
    ///
    /// Rejections are silent by contract; the returned decision exists so the
    /// front-end can disable controls, not to produce error text. A
    /// transport-level failure after admission surfaces one generic
    /// [`SessionEvent::SendFailed`] and is never retried.
    pub fn play_edge(&self, row: u32, col: u32, orientation: Orientation) -> MoveDecision {
        let slot = self.shared.identity.current();
        let intent = MoveIntent {
            player: slot,
            row,
            col,
            orientation,
        };
        let snapshot = self.view().snapshot;
        let decision = check_move(self.state(), &snapshot, slot, &intent);
        if decision.is_send() {
            let sent = match serde_json::to_string(&intent) {
                Ok(text) => self.shared.send_raw(text),
                Err(e) => {
                    tracing::error!("Failed to serialize move: {}", e);
                    false
                }
            };
            if !sent {
                self.shared.emit(SessionEvent::SendFailed);
            }
        }
        decision
    }

    /// Ask the server for a player slot. The local binding only changes when
    /// the server answers with a `you` message.
    pub fn request_slot(&self, slot: PlayerSlot) -> bool {
        self.shared.send_client(&ClientMessage::Join { player: slot })
    }

    /// Stop the session: cancel any pending reconnect delay, close the
    /// socket, and end the task. Idempotent.
    pub fn stop(&self) {
        self.shared.stopped.store(true, Ordering::SeqCst);
        self.shared.stop_notify.notify_one();
    }
}

async fn run_loop(shared: Arc<Shared>, config: SessionConfig) {
    let mut policy = ReconnectPolicy::new(config.base_retry_delay, config.max_retry_delay);

    while !shared.is_stopped() {
        shared.set_state(ConnectionState::Connecting);

        match connect_async(config.endpoint.as_str()).await {
            Ok((ws, _)) => {
                tracing::info!("Connected to {}", config.endpoint);
                policy.reset();

                let (tx, mut rx) = mpsc::unbounded_channel();
                if let Ok(mut outbound) = shared.outbound.lock() {
                    *outbound = Some(tx);
                }
                shared.set_state(ConnectionState::Connected);

                // Re-announce our slot on every open; the server holds no
                // memory of us across reconnects.
                shared.send_client(&ClientMessage::Join {
                    player: shared.identity.current(),
                });

                let closed = transport::drive_socket(
                    ws,
                    &mut rx,
                    config.ping_interval,
                    &shared.stop_notify,
                    |text| shared.handle_frame(text),
                )
                .await;

                if let Ok(mut outbound) = shared.outbound.lock() {
                    *outbound = None;
                }
                if closed == SocketClosed::Stopped {
                    break;
                }
                tracing::info!("Connection to {} closed", config.endpoint);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to {}: {}", config.endpoint, e);
            }
        }

        if shared.is_stopped() {
            break;
        }
        shared.set_state(ConnectionState::Reconnecting);
        let delay = policy.next_delay();
        tracing::debug!("Reconnecting in {:?} (attempt {})", delay, policy.retries());
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shared.stop_notify.notified() => break,
        }
    }

    shared.set_state(ConnectionState::Disconnected);
    tracing::debug!("Session task for {} ended", config.endpoint);
}
