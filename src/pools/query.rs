//! Observable pool query.
//!
//! Holds the latest [`QuerySnapshot`] for one pool address in a watch channel.
//! Renderers subscribe and redraw on every change. Switching the address
//! cancels the in-flight fetch and clears the previous pool's fields before
//! anything else is published.

use alloy::primitives::Address;
use chrono::Utc;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use crate::{
    errors::{PoolError, PoolResult},
    network::retry::{retry_with_backoff, RetryConfig},
    pools::PoolDataSource,
    types::{PoolData, QuerySnapshot, QueryStatus},
};

pub struct PoolQuery<S> {
    source: Arc<S>,
    retry: RetryConfig,
    state: watch::Sender<QuerySnapshot>,
    task: Option<JoinHandle<()>>,
}

impl<S: PoolDataSource> PoolQuery<S> {
    pub fn new(source: S, retry: RetryConfig) -> Self {
        let (state, _) = watch::channel(QuerySnapshot::default());
        Self {
            source: Arc::new(source),
            retry,
            state,
            task: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<QuerySnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> Option<PoolData> {
        self.state.borrow().data.clone()
    }

    /// Points the query at `input`. The text is not validated beyond what is
    /// needed to issue the reads; unparseable input settles as `Failed`.
    pub fn set_address(&mut self, input: &str) {
        let unchanged = {
            let current = self.state.borrow();
            current.status != QueryStatus::Idle && current.address == input
        };
        if unchanged {
            debug!("Pool query already tracks {}", input);
            return;
        }

        self.cancel();
        self.state.send_replace(QuerySnapshot::pending(input));

        match Address::from_str(input.trim()) {
            Ok(address) => self.spawn_fetch(input.to_string(), address),
            Err(e) => {
                let error = PoolError::InvalidAddress {
                    input: input.to_string(),
                    reason: e.to_string(),
                };
                self.state.send_modify(|snapshot| {
                    apply_result(snapshot, input, Err(error));
                });
            }
        }
    }

    /// Re-runs the fetch for the current address, keeping the last data
    /// visible until the new result lands.
    pub fn refetch(&mut self) {
        let input = self.state.borrow().address.clone();
        let Ok(address) = Address::from_str(input.trim()) else {
            return;
        };
        if self.task.as_ref().is_some_and(|task| !task.is_finished()) {
            debug!("Fetch for {} still in flight, skipping refetch", input);
            return;
        }

        self.state.send_modify(|snapshot| snapshot.status = QueryStatus::Pending);
        self.spawn_fetch(input, address);
    }

    fn spawn_fetch(&mut self, input: String, address: Address) {
        let source = Arc::clone(&self.source);
        let retry = self.retry.clone();
        let state = self.state.clone();

        self.task = Some(tokio::spawn(async move {
            let result = retry_with_backoff(
                || source.fetch(address),
                &retry,
                &format!("fetch pool {}", address),
            ).await;

            state.send_if_modified(|snapshot| apply_result(snapshot, &input, result));
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Publishes a fetch outcome into `snapshot`. Results for an address the
/// query no longer tracks are dropped and leave the snapshot untouched.
fn apply_result(snapshot: &mut QuerySnapshot, input: &str, result: PoolResult<PoolData>) -> bool {
    if snapshot.address != input {
        debug!("Discarding result for {}, query now tracks {}", input, snapshot.address);
        return false;
    }
    match result {
        Ok(data) => {
            info!("✅ Pool data resolved for {}", input);
            snapshot.status = QueryStatus::Resolved;
            snapshot.data = Some(data);
            snapshot.error_kind = None;
        }
        Err(e) => {
            warn!(kind = e.kind(), "⚠️ Pool data fetch failed for {}: {}", input, e);
            snapshot.status = QueryStatus::Failed;
            snapshot.error_kind = Some(e.kind().to_string());
        }
    }
    snapshot.updated_at = Some(Utc::now());
    true
}

impl<S> Drop for PoolQuery<S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
