//! Background removal of expired entries.

use std::hash::Hash;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::store::Inner;

/// Handle to a running sweep task.
///
/// The sweep sleeps until the earliest expiry deadline in the store, removes
/// everything that has expired by then and goes back to sleep. Every `set`
/// wakes it so that a new, earlier deadline is noticed.
///
/// Dropping the handle cancels the sweep; [`SweepHandle::stop`] additionally
/// waits until the task has terminated.
#[derive(Debug)]
pub struct SweepHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SweepHandle {
    pub(super) fn spawn<K, V>(inner: Arc<Inner<K, V>>) -> Self
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(sweep_loop(inner, cancel.clone()));
        Self {
            cancel,
            task: Some(task),
        }
    }

    /// Returns true while the sweep task is alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels the sweep and waits for the task to finish.
    ///
    /// When this returns no sweep activity is left for this handle.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "Cache sweep task panicked");
            }
        }
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn sweep_loop<K, V>(inner: Arc<Inner<K, V>>, cancel: CancellationToken)
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    loop {
        let deadline = inner.next_deadline();
        let expired = async {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = inner.inserted.notified() => {}
            _ = expired => {
                let removed = inner.remove_expired();
                tracing::trace!(removed, "Swept expired cache entries");
            }
        }
    }
    tracing::debug!("Cache sweep stopped");
}
