//! Cancellable scheduled tasks.
//!
//! Each fixed-delay behavior (landing transition, ripple cleanup, notice
//! expiry) is a task owned by the app: cancel it and the message never
//! fires, drop it and it aborts with its owner. This replaces
//! fire-and-forget timers that could outlive the state they reference.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::messages::AppMessage;

/// A one-shot timer that delivers an [`AppMessage`] after a delay unless
/// cancelled or dropped first.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Schedule `msg` to be sent on `tx` after `delay`.
    pub fn after(delay: Duration, tx: UnboundedSender<AppMessage>, msg: AppMessage) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may be gone during shutdown; nothing to do then.
            let _ = tx.send(msg);
        });
        Self { handle }
    }

    /// Cancel the task; the message will not be delivered.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
