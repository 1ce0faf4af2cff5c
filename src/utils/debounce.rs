use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs only the last of a burst of calls, once `wait` has passed without a
/// newer call. Must be used from inside a tokio runtime.
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let wait = self.wait;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f();
        });

        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Drops any scheduled call without running it.
    pub fn cancel(&self) {
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
