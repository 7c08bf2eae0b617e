//! Shutdown coordination.

use tokio::sync::watch;

/// One-shot shutdown coordinator.
///
/// Built on a watch channel so the triggered state is level, not edge: a
/// waiter that subscribes after the trigger still observes it. Duplicate
/// triggers are harmless.
#[derive(Clone)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        // send() drops the value when no receiver is subscribed yet;
        // send_replace stores it unconditionally.
        self.tx.send_replace(true);
    }

    /// Whether the shutdown signal has been triggered.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait until the shutdown signal is triggered.
    pub async fn triggered(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in self, so wait_for cannot fail here.
        let _ = rx.wait_for(|triggered| *triggered).await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
