//! Debounced, cancellable background tasks.
//!
//! Each call to [`Debouncer::schedule`] supersedes the previous one: the old
//! task is cancelled whether it is still waiting out the delay or already
//! running, and only the newest job gets to run.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Owns the most recently scheduled task and cancels it on replacement or drop.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

/// Handle to one scheduled job.
#[derive(Debug)]
pub struct DebouncedTask {
    token: CancellationToken,
    handle: JoinHandle<bool>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancels the previous task and spawns `job` after the delay.
    ///
    /// `job` receives the task's token so that in-flight work (a network
    /// request, say) can stop when a newer task is scheduled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F, Fut>(&mut self, job: F) -> DebouncedTask
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let task_token = token.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => return false,
                _ = tokio::time::sleep(delay) => {}
            }
            job(task_token.clone()).await;
            !task_token.is_cancelled()
        });

        #[cfg(feature = "tracing")]
        tracing::debug!("Debounced task scheduled with {:?} delay", delay);

        self.pending = Some(token.clone());
        DebouncedTask { token, handle }
    }

    /// Cancels the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            #[cfg(feature = "tracing")]
            {
                if !token.is_cancelled() {
                    tracing::debug!("Debounced task superseded");
                }
            }
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl DebouncedTask {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A clone of the task's cancellation token.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Waits for the task to end.
    ///
    /// Returns `true` if the job ran to completion without being cancelled.
    pub async fn finished(self) -> bool {
        self.handle.await.unwrap_or(false)
    }
}
