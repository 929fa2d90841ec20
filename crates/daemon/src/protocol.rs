// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The operator command protocol: a small set of requests/responses carried
//! over a length-prefixed JSON wire format on the Unix socket.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sentinel_core::{Instance, SessionLogEntry, Status};
use thiserror::Error;

/// Protocol version, reported in `Hello` so a CLI can detect a mismatched
/// daemon before sending commands it doesn't understand.
pub const PROTOCOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum message size (16 MB). Every message here is a small JSON
/// envelope; anything near this size indicates a misbehaving peer.
pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Default IPC timeout for one request/response round trip.
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message too large: {size} bytes (max {max})")]
    MessageTooLarge { size: usize, max: usize },
    #[error("connection closed")]
    ConnectionClosed,
    #[error("timeout")]
    Timeout,
}

/// A serializable view of one `Instance`, converting its monotonic
/// `last_activity_time: Instant` to an elapsed duration at snapshot time
/// since `Instant` itself carries no serde impl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub pid: u32,
    pub display_label: String,
    pub status: Status,
    pub last_activity_ms_ago: u64,
    pub auto_interventions_since_positive: u32,
    pub consecutive_recovery_failures: u32,
    pub manual_pause: bool,
}

impl From<&Instance> for InstanceSummary {
    fn from(instance: &Instance) -> Self {
        Self {
            pid: instance.pid,
            display_label: instance.display_label.clone(),
            status: instance.status.clone(),
            last_activity_ms_ago: std::time::Instant::now()
                .saturating_duration_since(instance.last_activity_time)
                .as_millis() as u64,
            auto_interventions_since_positive: instance.auto_interventions_since_positive,
            consecutive_recovery_failures: instance.consecutive_recovery_failures,
            manual_pause: instance.manual_pause,
        }
    }
}

/// Requests the operator command surface accepts, per `nudge`/`pause`/
/// `resume`/`status`/`session-log` CLI verbs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    Ping,
    Hello { version: String },
    Shutdown,
    Status,
    ListInstances,
    PauseMonitoring,
    ResumeMonitoring,
    ResumeInterventions { pid: u32 },
    NudgeNow { pid: u32 },
    SessionLog { lines: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Ok,
    Pong,
    Hello { version: String },
    ShuttingDown,
    Status {
        uptime_secs: u64,
        instances_active: usize,
        monitoring_paused: bool,
    },
    Instances {
        instances: Vec<InstanceSummary>,
    },
    SessionLog {
        entries: Vec<SessionLogEntry>,
    },
    Error {
        message: String,
    },
}

pub fn encode<T: Serialize>(msg: &T) -> Result<Vec<u8>, ProtocolError> {
    let json = serde_json::to_vec(msg)?;
    if json.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: json.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    Ok(json)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProtocolError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub async fn read_message<R: tokio::io::AsyncReadExt + Unpin>(
    reader: &mut R,
) -> Result<Vec<u8>, ProtocolError> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Err(ProtocolError::ConnectionClosed);
        }
        Err(e) => return Err(ProtocolError::Io(e)),
    }
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: len,
            max: MAX_MESSAGE_SIZE,
        });
    }
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).await?;
    Ok(buf)
}

pub async fn write_message<W: tokio::io::AsyncWriteExt + Unpin>(
    writer: &mut W,
    data: &[u8],
) -> Result<(), ProtocolError> {
    let len = data.len();
    if len > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: len,
            max: MAX_MESSAGE_SIZE,
        });
    }
    writer.write_all(&(len as u32).to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn read_request<R: tokio::io::AsyncReadExt + Unpin>(
    reader: &mut R,
    timeout: std::time::Duration,
) -> Result<Request, ProtocolError> {
    let bytes = tokio::time::timeout(timeout, read_message(reader))
        .await
        .map_err(|_| ProtocolError::Timeout)??;
    decode(&bytes)
}

pub async fn write_response<W: tokio::io::AsyncWriteExt + Unpin>(
    writer: &mut W,
    response: &Response,
    timeout: std::time::Duration,
) -> Result<(), ProtocolError> {
    let data = encode(response)?;
    tokio::time::timeout(timeout, write_message(writer, &data))
        .await
        .map_err(|_| ProtocolError::Timeout)?
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
