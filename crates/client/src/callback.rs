//! Callback-style dispatch over the awaitable client.
//!
//! UI callers that cannot await still need results delivered on a thread
//! they control. [`CallbackClient`] spawns each operation onto a tokio
//! runtime and parks the finished callback in a [`CompletionQueue`];
//! whichever thread drains the queue is the thread the callback runs on,
//! so delivery context is chosen by the caller rather than guessed by the
//! client.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use homelink_core::appliance::{Appliance, Operation};

use crate::client::ApiClient;
use crate::error::ApiError;

type Completion = Box<dyn FnOnce() + Send>;

/// Hand-off point between worker tasks and the caller's main thread.
pub struct CompletionQueue {
    pending: Mutex<VecDeque<Completion>>,
    ready: Condvar,
}

impl CompletionQueue {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            pending: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
        })
    }

    fn push(&self, completion: Completion) {
        self.pending
            .lock()
            .expect("completion queue poisoned")
            .push_back(completion);
        self.ready.notify_all();
    }

    /// Run every currently pending callback on the calling thread, in the
    /// order the operations finished. Returns how many ran. Completions
    /// enqueued while draining wait for the next drain, which keeps a
    /// single drain bounded.
    pub fn drain(&self) -> usize {
        let drained: Vec<Completion> = {
            let mut pending = self.pending.lock().expect("completion queue poisoned");
            pending.drain(..).collect()
        };
        let count = drained.len();
        for completion in drained {
            completion();
        }
        count
    }

    /// Block until at least one completion is pending or the timeout
    /// passes, then drain. Returns how many callbacks ran.
    pub fn drain_timeout(&self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut pending = self.pending.lock().expect("completion queue poisoned");
        while pending.is_empty() {
            let now = Instant::now();
            if now >= deadline {
                return 0;
            }
            let (guard, _) = self
                .ready
                .wait_timeout(pending, deadline - now)
                .expect("completion queue poisoned");
            pending = guard;
        }
        drop(pending);
        self.drain()
    }

    /// True when no completions are waiting.
    pub fn is_empty(&self) -> bool {
        self.pending
            .lock()
            .expect("completion queue poisoned")
            .is_empty()
    }
}

/// Callback-dispatch adapter over [`ApiClient`].
///
/// Every operation delegates to the awaitable client, so the two dispatch
/// styles cannot drift apart on URL building, error mapping, or the
/// confirmation check.
pub struct CallbackClient {
    inner: ApiClient,
    handle: Handle,
    completions: Arc<CompletionQueue>,
}

impl CallbackClient {
    /// Wrap an awaitable client, spawning operations onto `handle`.
    pub fn new(inner: ApiClient, handle: Handle) -> Self {
        Self {
            inner,
            handle,
            completions: CompletionQueue::new(),
        }
    }

    /// The queue the caller's main thread is expected to drain.
    pub fn completions(&self) -> Arc<CompletionQueue> {
        Arc::clone(&self.completions)
    }

    /// Fetch the appliance list, delivering the result through the queue.
    pub fn fetch_appliance_list<F>(&self, on_complete: F)
    where
        F: FnOnce(Result<Vec<Appliance>, ApiError>) + Send + 'static,
    {
        let client = self.inner.clone();
        self.complete_with(
            async move { client.fetch_appliance_list().await },
            on_complete,
        );
    }

    /// Fetch one appliance's operations, delivering the result through the
    /// queue.
    pub fn fetch_operation_list<F>(&self, appliance_id: &str, on_complete: F)
    where
        F: FnOnce(Result<Vec<Operation>, ApiError>) + Send + 'static,
    {
        let client = self.inner.clone();
        let appliance_id = appliance_id.to_string();
        self.complete_with(
            async move { client.fetch_operation_list(&appliance_id).await },
            on_complete,
        );
    }

    /// Run an operation on an appliance, delivering the confirmation
    /// through the queue.
    pub fn post_operation<F>(&self, appliance_id: &str, operation_id: &str, on_complete: F)
    where
        F: FnOnce(Result<String, ApiError>) + Send + 'static,
    {
        let client = self.inner.clone();
        let appliance_id = appliance_id.to_string();
        let operation_id = operation_id.to_string();
        self.complete_with(
            async move { client.post_operation(&appliance_id, &operation_id).await },
            on_complete,
        );
    }

    fn complete_with<T, Fut, F>(&self, operation: Fut, on_complete: F)
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
        F: FnOnce(Result<T, ApiError>) + Send + 'static,
    {
        let completions = Arc::clone(&self.completions);
        self.handle.spawn(async move {
            let result = operation.await;
            completions.push(Box::new(move || on_complete(result)));
        });
    }
}
