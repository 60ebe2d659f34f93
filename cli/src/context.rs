use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use turnclock_core::GameSession;

use crate::settings::Settings;

/// Shared handle to the running game session.
pub type SessionHandle = Arc<RwLock<GameSession>>;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub settings: Arc<RwLock<Settings>>,
    /// The active game. None before the first `start`.
    session: Arc<RwLock<Option<SessionHandle>>>,
    /// Periodic tick task driving the session clock
    pub clock_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    /// Wall-clock moment the current game started (display only)
    pub game_started_at: Arc<RwLock<Option<DateTime<Local>>>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            settings: Arc::new(RwLock::new(Settings::load())),
            session: Arc::new(RwLock::new(None)),
            clock_task: Arc::new(Mutex::new(None)),
            game_started_at: Arc::new(RwLock::new(None)),
        }
    }

    /// Install a new game session, replacing any previous one.
    /// The clock task must be stopped before the old session is dropped.
    pub async fn start_session(&self, session: GameSession) -> SessionHandle {
        let handle = Arc::new(RwLock::new(session));
        *self.session.write().await = Some(Arc::clone(&handle));
        *self.game_started_at.write().await = Some(Local::now());
        handle
    }

    /// Get the current session handle, if one exists.
    pub async fn session(&self) -> Option<SessionHandle> {
        self.session.read().await.clone()
    }

    /// Abort the clock task if one is running. Idempotent.
    pub async fn stop_clock(&self) {
        if let Some(handle) = self.clock_task.lock().await.take() {
            handle.abort();
        }
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
