use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{AbortHandle, BoxFuture, abortable};
use tokio::sync::watch;

use crate::client::ApiError;

/// The three display states of a page. A mount enters Loading, then settles
/// in exactly one of Ready or Failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PageState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

type Fetch<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync>;

/// One page mount: owns the fetch lifecycle for as long as the page is on
/// screen. Dropping the mount aborts whatever is still in flight, so a
/// fetch can never outlive its page. `retry` re-enters Loading and runs
/// the same logical request again.
pub struct PageMount<T> {
    tx: watch::Sender<PageState<T>>,
    rx: watch::Receiver<PageState<T>>,
    fetch: Fetch<T>,
    abort: AbortHandle,
}

impl<T> PageMount<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn mount<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let fetch: Fetch<T> = Arc::new(move || fetch().boxed());
        let (tx, rx) = watch::channel(PageState::Loading);
        let abort = spawn_fetch(fetch.clone(), tx.clone());

        PageMount {
            tx,
            rx,
            fetch,
            abort,
        }
    }

    pub fn state(&self) -> PageState<T> {
        self.rx.borrow().clone()
    }

    /// Re-issues the same fetch after a failure (or at any time).
    pub fn retry(&mut self) {
        self.abort.abort();
        let _ = self.tx.send(PageState::Loading);
        self.abort = spawn_fetch(self.fetch.clone(), self.tx.clone());
    }

    /// Waits until the mount has left Loading and returns the settled state.
    pub async fn settled(&mut self) -> PageState<T> {
        loop {
            {
                let state = self.rx.borrow_and_update();
                if !state.is_loading() {
                    return state.clone();
                }
            }
            // The sender lives in self, so the channel cannot close.
            if self.rx.changed().await.is_err() {
                return self.rx.borrow().clone();
            }
        }
    }
}

fn spawn_fetch<T>(fetch: Fetch<T>, tx: watch::Sender<PageState<T>>) -> AbortHandle
where
    T: Clone + Send + Sync + 'static,
{
    let fut = (fetch)();
    let (task, handle) = abortable(async move {
        let next = match fut.await {
            Ok(view) => PageState::Ready(view),
            Err(err) => PageState::Failed(err.to_string()),
        };
        let _ = tx.send(next);
    });
    tokio::spawn(task);
    handle
}

impl<T> Drop for PageMount<T> {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
