//! Commands issued by the cloud for an edge device to execute.
//!
//! Status transitions (`pending -> sent -> acknowledged`, or `failed`) are
//! asserted by this contract but enforced by the dispatch layer that
//! consumes it.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::device::DeviceStatus;
use crate::error::ContractError;

/// Command actions edge devices execute.
///
/// The set is closed and versioned. Earlier actions (WebRTC polling,
/// config push, cache clearing, emergency stop) have been retired; an
/// unknown tag is a forward-compatibility error, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    ForceSync,
    AdjustSyncInterval,
}

impl CommandAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForceSync => "force_sync",
            Self::AdjustSyncInterval => "adjust_sync_interval",
        }
    }
}

impl FromStr for CommandAction {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "force_sync" => Ok(Self::ForceSync),
            "adjust_sync_interval" => Ok(Self::AdjustSyncInterval),
            other => Err(ContractError::UnknownAction(other.to_string())),
        }
    }
}

/// Command lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Pending,
    Sent,
    Acknowledged,
    Failed,
}

impl CommandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Acknowledged => "acknowledged",
            Self::Failed => "failed",
        }
    }

    /// Whether the command has reached a final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Acknowledged | Self::Failed)
    }
}

/// Command priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandPriority {
    Normal,
    High,
    Urgent,
}

impl Default for CommandPriority {
    fn default() -> Self {
        Self::Normal
    }
}

/// How a command reaches the edge device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandDeliveryMethod {
    Websocket,
    Queued,
}

/// Base command shape: what edge devices receive and process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub id: String,
    pub barn_id: String,
    pub action: CommandAction,
    /// Action-specific payload, see [`ForceSyncPayload`] and
    /// [`AdjustSyncIntervalPayload`]
    pub data: Value,
    pub status: CommandStatus,
    pub created_at: DateTime<Utc>,
}

/// Full tracking record stored in the cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudCommand {
    #[serde(flatten)]
    pub command: Command,
    pub priority: CommandPriority,
    pub delivery_method: CommandDeliveryMethod,
    pub sent_at: Option<DateTime<Utc>>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub idempotency_key: Option<String>,
}

/// Scope filter for a forced sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPriority {
    All,
    Critical,
}

/// Payload for [`CommandAction::ForceSync`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceSyncPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<SyncPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_media: Option<bool>,
}

/// Payload for [`CommandAction::AdjustSyncInterval`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustSyncIntervalPayload {
    pub interval_minutes: u32,
    /// Revert to the default interval after this long, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// Command creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommandRequest {
    pub barn_id: String,
    pub action: CommandAction,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CommandPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// Command acknowledgment from an edge device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcknowledgeCommandRequest {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

/// Command send response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCommandResponse {
    pub command_id: String,
    pub delivery: CommandDeliveryMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_latency: Option<String>,
    /// Connectivity of the barn's edge agent at send time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barn_status: Option<DeviceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
