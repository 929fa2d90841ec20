// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener task for the operator command surface: accepts Unix socket
//! connections and dispatches each request to the supervisor.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::Notify;
use tracing::{debug, error};

use crate::lifecycle::DaemonSupervisor;
use crate::protocol::{self, InstanceSummary, Request, Response, DEFAULT_TIMEOUT, PROTOCOL_VERSION};

/// Shared context handed to every connection's request handler.
pub struct ListenCtx {
    pub supervisor: DaemonSupervisor,
    pub start_time: Instant,
    pub shutdown: Arc<Notify>,
}

pub struct Listener {
    socket: UnixListener,
    ctx: Arc<ListenCtx>,
}

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("protocol error: {0}")]
    Protocol(#[from] protocol::ProtocolError),
}

impl Listener {
    pub fn new(socket: UnixListener, ctx: Arc<ListenCtx>) -> Self {
        Self { socket, ctx }
    }

    /// Run the accept loop until the process is torn down. Each connection
    /// is one request/response round trip, handled on its own task so a
    /// slow or stuck client can't block the rest of the operator surface.
    pub async fn run(self) {
        loop {
            match self.socket.accept().await {
                Ok((stream, _)) => {
                    let ctx = Arc::clone(&self.ctx);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, &ctx).await {
                            match e {
                                ConnectionError::Protocol(protocol::ProtocolError::ConnectionClosed) => {
                                    debug!("client disconnected");
                                }
                                ConnectionError::Protocol(protocol::ProtocolError::Timeout) => {
                                    tracing::warn!("connection timeout");
                                }
                                _ => error!("connection error: {}", e),
                            }
                        }
                    });
                }
                Err(e) => error!("accept error: {}", e),
            }
        }
    }
}

async fn handle_connection(stream: UnixStream, ctx: &ListenCtx) -> Result<(), ConnectionError> {
    let (mut reader, mut writer) = stream.into_split();
    let request = protocol::read_request(&mut reader, DEFAULT_TIMEOUT).await?;

    if matches!(request, Request::Ping) {
        debug!(request = ?request, "received request");
    } else {
        tracing::info!(request = ?request, "received request");
    }

    let response = handle_request(request, ctx).await;
    protocol::write_response(&mut writer, &response, DEFAULT_TIMEOUT).await?;
    Ok(())
}

async fn handle_request(request: Request, ctx: &ListenCtx) -> Response {
    match request {
        Request::Ping => Response::Pong,

        Request::Hello { version: _ } => Response::Hello {
            version: PROTOCOL_VERSION.to_string(),
        },

        Request::Shutdown => {
            ctx.shutdown.notify_one();
            Response::ShuttingDown
        }

        Request::Status => Response::Status {
            uptime_secs: ctx.start_time.elapsed().as_secs(),
            instances_active: ctx.supervisor.instances_snapshot().len(),
            monitoring_paused: !ctx.supervisor.is_monitoring(),
        },

        Request::ListInstances => {
            let instances = ctx
                .supervisor
                .instances_snapshot()
                .iter()
                .map(InstanceSummary::from)
                .collect();
            Response::Instances { instances }
        }

        Request::PauseMonitoring => {
            ctx.supervisor.pause_monitoring_global();
            Response::Ok
        }

        Request::ResumeMonitoring => {
            ctx.supervisor.resume_monitoring_global();
            Response::Ok
        }

        Request::ResumeInterventions { pid } => {
            ctx.supervisor.resume_interventions(pid);
            Response::Ok
        }

        Request::NudgeNow { pid } => {
            ctx.supervisor.nudge_now(pid).await;
            Response::Ok
        }

        Request::SessionLog { lines } => {
            let mut entries = ctx.supervisor.session_log_snapshot();
            if entries.len() > lines {
                entries = entries.split_off(entries.len() - lines);
            }
            Response::SessionLog { entries }
        }
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
