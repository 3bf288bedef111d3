//! Cancellable delayed actions.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

/// Runs an action once input has been idle for `delay`.
///
/// Every [`Debouncer::schedule`] aborts the pending action (if any) before arming a new one,
/// so at most one action is outstanding. Dropping the debouncer cancels it as well.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an armed action has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Replaces the pending action with `action`, due after the configured delay.
    ///
    /// Outside a Tokio runtime there is no timer to arm, so `action` runs immediately.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let Ok(handle) = Handle::try_current() else {
            warn!("No async runtime available; running debounced action immediately");
            action();
            return;
        };

        let delay = self.delay;
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
        trace!(?delay, "Debounced action armed");
    }

    /// Aborts the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
