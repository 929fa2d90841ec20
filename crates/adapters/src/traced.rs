// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability around AX calls.
//!
//! Real accessibility APIs are not safe to hammer from arbitrary tokio
//! worker threads, so every call is serialized onto one dedicated
//! background task that owns the wrapped `AxDriver`; callers talk to it
//! over an mpsc/oneshot round trip with a fixed timeout.

use async_trait::async_trait;
use sentinel_core::Locator;
use tokio::sync::{mpsc, oneshot};
use tracing::Instrument;

use crate::ax::{AxDriver, AxError, Element};

/// AX calls are bounded to this duration; anything slower comes back as
/// `AxError::Timeout` rather than hanging the caller.
const AX_CALL_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// The dispatch task's inbound queue depth; callers block on `send` past
/// this, which is the intended backpressure (one host thread, one call at
/// a time).
const DISPATCH_QUEUE_DEPTH: usize = 32;

enum AxCommand {
    Query {
        pid: u32,
        locator: Locator,
        attributes_wanted: Vec<String>,
        reply: oneshot::Sender<Result<Option<Element>, AxError>>,
    },
    Perform {
        pid: u32,
        locator: Locator,
        action_name: String,
        value: Option<String>,
        reply: oneshot::Sender<Result<(), AxError>>,
    },
    IsSettable {
        element: Element,
        attribute: String,
        reply: oneshot::Sender<bool>,
    },
}

/// Wrapper that adds tracing spans, elapsed-time logging, and a fixed
/// timeout to any `AxDriver`, matching the rest of the workspace's "log
/// around every external call" convention. Dispatches every call onto one
/// dedicated background task rather than running the wrapped driver
/// directly on the caller's task.
pub struct TracedAx<D> {
    tx: mpsc::Sender<AxCommand>,
    _driver: std::marker::PhantomData<fn() -> D>,
}

impl<D> Clone for TracedAx<D> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            _driver: std::marker::PhantomData,
        }
    }
}

impl<D: AxDriver> TracedAx<D> {
    pub fn new(inner: D) -> Self {
        let (tx, rx) = mpsc::channel(DISPATCH_QUEUE_DEPTH);
        tokio::spawn(Self::host_loop(inner, rx));
        Self {
            tx,
            _driver: std::marker::PhantomData,
        }
    }

    /// Owns `inner` for the lifetime of the wrapper and serializes every
    /// AX call through it, one at a time.
    async fn host_loop(inner: D, mut rx: mpsc::Receiver<AxCommand>) {
        while let Some(cmd) = rx.recv().await {
            match cmd {
                AxCommand::Query { pid, locator, attributes_wanted, reply } => {
                    let attrs: Vec<&str> = attributes_wanted.iter().map(String::as_str).collect();
                    let span = tracing::info_span!("ax.query", pid);
                    let result = async {
                        let start = std::time::Instant::now();
                        let result = inner.query(pid, &locator, &attrs).await;
                        let elapsed_ms = start.elapsed().as_millis() as u64;
                        match &result {
                            Ok(Some(_)) => tracing::debug!(elapsed_ms, "element found"),
                            Ok(None) => tracing::debug!(elapsed_ms, "element not found"),
                            Err(e) => tracing::warn!(elapsed_ms, error = %e, "query failed"),
                        }
                        result
                    }
                    .instrument(span)
                    .await;
                    let _ = reply.send(result);
                }
                AxCommand::Perform { pid, locator, action_name, value, reply } => {
                    let span = tracing::info_span!("ax.perform", pid, action_name = %action_name);
                    let result = async {
                        let start = std::time::Instant::now();
                        let result = inner.perform(pid, &locator, &action_name, value.as_deref()).await;
                        let elapsed_ms = start.elapsed().as_millis() as u64;
                        match &result {
                            Ok(()) => tracing::info!(elapsed_ms, "action performed"),
                            Err(e) => tracing::error!(elapsed_ms, error = %e, "action failed"),
                        }
                        result
                    }
                    .instrument(span)
                    .await;
                    let _ = reply.send(result);
                }
                AxCommand::IsSettable { element, attribute, reply } => {
                    let result = inner.is_settable(&element, &attribute).await;
                    let _ = reply.send(result);
                }
            }
        }
    }
}

#[async_trait]
impl<D: AxDriver> AxDriver for TracedAx<D> {
    async fn query(
        &self,
        pid: u32,
        locator: &Locator,
        attributes_wanted: &[&str],
    ) -> Result<Option<Element>, AxError> {
        let (reply, reply_rx) = oneshot::channel();
        let cmd = AxCommand::Query {
            pid,
            locator: locator.clone(),
            attributes_wanted: attributes_wanted.iter().map(|s| s.to_string()).collect(),
            reply,
        };
        if self.tx.send(cmd).await.is_err() {
            return Err(AxError::Other("AX host task is gone".to_string()));
        }
        match tokio::time::timeout(AX_CALL_TIMEOUT, reply_rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(AxError::Other("AX host task dropped the reply".to_string())),
            Err(_) => Err(AxError::Timeout),
        }
    }

    async fn perform(
        &self,
        pid: u32,
        locator: &Locator,
        action_name: &str,
        value: Option<&str>,
    ) -> Result<(), AxError> {
        let (reply, reply_rx) = oneshot::channel();
        let cmd = AxCommand::Perform {
            pid,
            locator: locator.clone(),
            action_name: action_name.to_string(),
            value: value.map(|s| s.to_string()),
            reply,
        };
        if self.tx.send(cmd).await.is_err() {
            return Err(AxError::Other("AX host task is gone".to_string()));
        }
        match tokio::time::timeout(AX_CALL_TIMEOUT, reply_rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(AxError::Other("AX host task dropped the reply".to_string())),
            Err(_) => Err(AxError::Timeout),
        }
    }

    async fn is_settable(&self, element: &Element, attribute: &str) -> bool {
        let (reply, reply_rx) = oneshot::channel();
        let cmd = AxCommand::IsSettable {
            element: element.clone(),
            attribute: attribute.to_string(),
            reply,
        };
        if self.tx.send(cmd).await.is_err() {
            return false;
        }
        matches!(tokio::time::timeout(AX_CALL_TIMEOUT, reply_rx).await, Ok(Ok(true)))
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
