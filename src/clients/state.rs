//! Connection lifecycle state machine.
//!
//! `Uninitialized -> Connecting -> {Connected | Failed}`. The state is an
//! explicit observable value so liveness is a pure read and tests can drive
//! "not yet connected" vs "connected" vs "failed" deterministically instead
//! of racing real establishment. There is no transition out of `Connected`:
//! a transport that later drops is still reported alive, and no reconnect
//! is attempted (accepted limitation of the design).

use parking_lot::RwLock;
use std::sync::Arc;

/// Lifecycle state of one backend connection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Uninitialized,
    Connecting,
    Connected,
    Failed,
}

impl ConnectionState {
    /// Liveness as reported to callers: only an established connection
    /// counts. `Failed` and "not yet connected" collapse to `false`.
    pub fn is_alive(self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// Shared, cheaply-clonable cell holding a connection's current state.
///
/// Written by the establishment task, read by arbitrarily many concurrent
/// requests.
#[derive(Debug, Clone, Default)]
pub struct StateCell(Arc<RwLock<ConnectionState>>);

impl StateCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ConnectionState {
        *self.0.read()
    }

    pub fn set(&self, state: ConnectionState) {
        *self.0.write() = state;
    }

    pub fn is_alive(&self) -> bool {
        self.current().is_alive()
    }
}
