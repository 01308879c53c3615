use std::future::Future;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Handle to one scheduled invocation.
#[derive(Debug)]
pub struct DebounceHandle {
    abort: AbortHandle,
}

impl DebounceHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// True once the invocation ran or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

/// Runs only the most recently scheduled callback, after a quiet period.
///
/// Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
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

    /// Schedules `f` to run after the delay, cancelling any pending call.
    pub fn schedule<F>(&mut self, f: F) -> DebounceHandle
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_async(async move { f() })
    }

    /// Like [`Debouncer::schedule`], for async work.
    pub fn schedule_async<Fut>(&mut self, fut: Fut) -> DebounceHandle
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fut.await;
        });
        let handle = DebounceHandle {
            abort: task.abort_handle(),
        };
        self.pending = Some(task);
        handle
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Waits for the pending call, if any, to run.
    pub async fn settle(&mut self) {
        if let Some(task) = self.pending.take() {
            // 被取消的任務回傳 JoinError，可以忽略
            let _ = task.await;
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
