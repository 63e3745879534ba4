//! Session lifecycle signaling.
//!
//! The browser original forced a navigation to the landing page when a
//! credential refresh failed. As a library we publish the transition on a
//! watch channel instead and let the embedding application decide what
//! "return to the unauthenticated entry point" means for it.

use tokio::sync::watch;

/// Observable session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No credentials stored; requests go out without an Authorization header.
    Unauthenticated,
    /// A credential pair is stored and requests are sent with it.
    Authenticated,
    /// Credential refresh failed terminally; both tokens were cleared and
    /// the user must authenticate again.
    Expired,
}

/// Publisher side of the session state channel, owned by the client.
#[derive(Debug)]
pub struct SessionEvents {
    tx: watch::Sender<SessionState>,
}

impl SessionEvents {
    pub fn new(initial: SessionState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Subscribe to session state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    pub fn publish(&self, state: SessionState) {
        // send_replace never fails; the sender keeps the channel alive even
        // with no subscribers.
        self.tx.send_replace(state);
    }

    pub fn current(&self) -> SessionState {
        *self.tx.borrow()
    }
}
