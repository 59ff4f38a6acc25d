//! Cancellable delayed work.
//!
//! A [`ScheduledTask`] is one unit of work spawned on the tokio runtime that
//! runs after a delay unless cancelled first. A [`Debouncer`] keeps at most
//! one of them outstanding: scheduling again cancels the previous one, so
//! only the last schedule in a burst ever runs.

use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::FormError;

/// Handle to delayed work. Dropping the handle cancels the work.
#[derive(Debug)]
pub struct ScheduledTask {
    join: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `work` to run on `runtime` once `delay` has elapsed.
    pub fn spawn<F>(runtime: &Handle, delay: Duration, work: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let join = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            work();
        });
        Self { join }
    }

    /// Cancel the work if it has not run yet. No-op once it has fired.
    pub fn cancel(&self) {
        self.join.abort();
    }

    /// Whether the work has fired or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Trailing-edge debounce over [`ScheduledTask`].
#[derive(Debug)]
pub struct Debouncer {
    runtime: Handle,
    pending: Option<ScheduledTask>,
}

impl Debouncer {
    /// Create a debouncer bound to the current tokio runtime.
    pub fn new() -> Result<Self, FormError> {
        Ok(Self {
            runtime: Handle::try_current()?,
            pending: None,
        })
    }

    /// Cancel any outstanding work, then schedule `work` after `delay`.
    pub fn schedule<F>(&mut self, delay: Duration, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        debug!("Debounce scheduled in {:?}", delay);
        self.pending = Some(ScheduledTask::spawn(&self.runtime, delay, work));
    }

    /// Cancel outstanding work without scheduling new work.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            if !task.is_finished() {
                debug!("Debounce cancelled before firing");
            }
            task.cancel();
        }
    }

    /// Whether scheduled work is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
