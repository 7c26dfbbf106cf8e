//! Fetch lifetimes tied to a view.
//!
//! A [`ViewScope`] spawns the fetches a view needs and aborts all of them when
//! the scope is closed or dropped. A view that goes away therefore never
//! receives results: awaiting an aborted fetch yields [`HubError::Cancelled`].

use std::future::Future;

use tokio::task::{AbortHandle, JoinHandle};

use crate::error::{HubError, Result};

#[derive(Default)]
pub struct ViewScope {
    handles: Vec<AbortHandle>,
}

/// A fetch spawned inside a [`ViewScope`].
pub struct ScopedTask<T> {
    handle: JoinHandle<Result<T>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `fut` on the current Tokio runtime, owned by this scope.
    pub fn spawn<F, T>(&mut self, fut: F) -> ScopedTask<T>
    where
        F: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        self.handles.retain(|h| !h.is_finished());
        let handle = tokio::spawn(fut);
        self.handles.push(handle.abort_handle());
        ScopedTask { handle }
    }

    /// Number of spawned fetches still running.
    pub fn in_flight(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Abort every fetch spawned in this scope.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

impl<T> ScopedTask<T> {
    /// Wait for the fetch. Returns [`HubError::Cancelled`] if its scope was
    /// closed first.
    pub async fn join(self) -> Result<T> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(HubError::Cancelled),
            Err(e) => Err(HubError::Task(e.to_string())),
        }
    }
}
