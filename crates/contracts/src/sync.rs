//! Sync protocol shapes: the periodic exchange reconciling edge-buffered
//! state with cloud-stored state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::barn::{SyncBufferStatus, SyncHealthMetrics};
use crate::command::{Command, CommandAction, SyncPriority};

/// Event types reported by an edge device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLogType {
    Detection,
    HealthAlert,
    SensorReading,
    CameraDetection,
    SystemEvent,
    CameraOffline,
    CameraOnline,
}

/// Event log entry from an edge device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLog {
    pub event_type: EventLogType,
    pub sequence_number: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horse_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

/// Sync request from an edge device
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_metrics: Option<SyncHealthMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_status: Option<SyncBufferStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventLog>>,
}

/// Sync response to an edge device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub events_processed: u64,
    pub pending_commands: Vec<Command>,
}

/// Kind of sync exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncPayloadType {
    Heartbeat,
    Data,
    Recovery,
}

/// Sync payload from an edge device (extended format)
///
/// The record arrays are untyped at this boundary; the receiving side
/// refines them per record kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    #[serde(rename = "type")]
    pub payload_type: SyncPayloadType,
    pub timestamp: DateTime<Utc>,
    pub sequence_number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_chunks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<SyncHealthMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_status: Option<SyncBufferStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horses: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stalls: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Value>>,
}

/// Sync instructions from the cloud to the edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncInstructions {
    pub chunk_size: u32,
    pub priority_filter: Option<SyncPriority>,
    pub delay_between_chunks: u64,
    pub sync_interval_minutes: u32,
}

/// Sync processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    Queued,
    Processing,
    Completed,
    Failed,
}

/// Per-kind record counts for a processed sync
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsProcessed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horses: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stalls: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<u64>,
}

/// Sync status for tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub sync_id: String,
    pub barn_id: String,
    pub status: SyncState,
    pub sync_type: SyncPayloadType,
    pub sequence_number: u64,
    pub chunk_number: Option<u32>,
    pub total_chunks: Option<u32>,

    pub received_at: DateTime<Utc>,
    pub processing_started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,

    pub records_processed: RecordsProcessed,
    pub error_message: Option<String>,
    pub retry_count: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal command shape embedded in sync responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCommand {
    pub id: String,
    pub action: CommandAction,
    pub data: Value,
}

/// Sync mode selected by the cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    Normal,
    Recovery,
}

/// Extended sync response, carries recovery instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponseExtended {
    pub sync_id: String,
    pub sync_mode: SyncMode,
    pub instructions: SyncInstructions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<SyncCommand>>,
}

/// Per-kind totals reported once a sync completes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStats {
    pub horses_processed: u64,
    pub stalls_processed: u64,
    pub sensors_processed: u64,
    pub events_processed: u64,
}

/// Sync status response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusResponse {
    pub sync_id: String,
    pub status: SyncState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SyncStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<SyncCommand>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Edge agent's websocket state reported in heartbeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartbeatSocketStatus {
    Connected,
    Disconnected,
    Connecting,
    Error,
}

/// Heartbeat request from an edge device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatRequest {
    pub websocket_status: HeartbeatSocketStatus,
    /// Seconds since the agent started
    pub uptime: u64,
    pub event_queue_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frigate_connected: Option<bool>,
}

/// Heartbeat response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    pub success: bool,
}
