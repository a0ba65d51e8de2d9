//! Debounce Module
//!
//! Delays a scheduled future until the caller has been quiet for the
//! configured interval; retriggering aborts the previously scheduled run.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

// == Debouncer ==
/// Schedules at most one pending future at a time.
///
/// Used by the list view to hold back search refetches until typing pauses:
/// each keystroke calls `call` with the refetch future, and only the last
/// one within the quiet window actually runs.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    // == Constructor ==
    /// Creates a debouncer with the given quiet interval.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    // == Call ==
    /// Schedules `future` to run after the quiet interval, aborting any
    /// previously scheduled run that has not fired yet.
    pub fn call<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            future.await;
        }));
    }

    // == Cancel ==
    /// Aborts the pending run, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    /// A debouncer with the standard search quiet window.
    fn default() -> Self {
        Self::new(crate::client::SEARCH_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
