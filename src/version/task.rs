//! Handle for a refresh running in the background

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::{JoinError, JoinHandle};

use crate::version::error::RefreshError;

/// Pending refresh started by [`spawn_refresh`](crate::version::list::spawn_refresh)
///
/// Await it to get the refresh result. Dropping the handle does not stop the
/// refresh; call [`RefreshTask::abort`] for that.
#[derive(Debug)]
pub struct RefreshTask {
    handle: JoinHandle<Result<(), RefreshError>>,
}

impl RefreshTask {
    pub(crate) fn new(handle: JoinHandle<Result<(), RefreshError>>) -> Self {
        Self { handle }
    }

    /// Returns true once the refresh has succeeded, failed or been aborted
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the refresh. Awaiting the task afterwards yields
    /// [`RefreshError::Cancelled`] unless it had already completed.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Future for RefreshTask {
    type Output = Result<(), RefreshError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|joined| joined.unwrap_or_else(|e| Err(join_error(e))))
    }
}

fn join_error(e: JoinError) -> RefreshError {
    if e.is_cancelled() {
        return RefreshError::Cancelled;
    }

    let payload = e.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    RefreshError::Panicked(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn resolves_to_task_result() {
        let task = RefreshTask::new(tokio::spawn(async { Ok(()) }));

        assert!(task.await.is_ok());
    }

    #[tokio::test]
    async fn aborted_task_resolves_to_cancelled() {
        let task = RefreshTask::new(tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }));

        task.abort();

        assert!(matches!(task.await, Err(RefreshError::Cancelled)));
    }

    #[tokio::test]
    async fn panicked_task_resolves_to_panicked() {
        let task = RefreshTask::new(tokio::spawn(async {
            if true {
                panic!("registry exploded");
            }
            Ok(())
        }));

        match task.await {
            Err(RefreshError::Panicked(msg)) => assert_eq!(msg, "registry exploded"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn is_finished_reports_completion() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let task = RefreshTask::new(tokio::spawn(async move {
            let _ = rx.await;
            Ok(())
        }));

        assert!(!task.is_finished());
        tx.send(()).unwrap();
        task.await.unwrap();
    }
}
