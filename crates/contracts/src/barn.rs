//! Barn records and the cloud-to-edge barn configuration.
//!
//! Not to be confused with [`crate::config`]: that document is owned by
//! the edge device, while [`Barn`] and [`BarnConfig`] here are owned and
//! served by the cloud.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::horse::BarnConfigHorse;

/// Package types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    FullBarn,
    StallOnly,
}

/// WebSocket connection status tracked on the barn record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebSocketStatus {
    Connected,
    Disconnected,
    Reconnecting,
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Health metrics stored in the barn record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
    pub uptime: u64,
}

/// Health metrics sent in sync requests from the edge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncHealthMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Buffer status stored in the barn record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferStatus {
    pub total_records: u64,
    pub oldest_record: Option<DateTime<Utc>>,
    pub newest_record: Option<DateTime<Utc>>,
    pub size_bytes: u64,
    pub critical_events: u64,
}

/// Buffer status sent in sync requests from the edge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncBufferStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_queued: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_queued: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_queued_timestamp: Option<DateTime<Utc>>,
}

/// Full barn record (cloud database)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barn {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub location: Option<GeoPoint>,
    pub timezone: String,
    pub owner_id: String,
    pub package_type: PackageType,

    // Stall configuration
    pub stall_count: u32,
    pub barn_code: String,
    pub logo_url: Option<String>,

    // Integration
    pub ha_url: Option<String>,
    pub api_key_hash: String,
    pub adopted_at: Option<DateTime<Utc>>,

    // Cloudflare Tunnel
    pub cf_tunnel_id: Option<String>,
    pub cf_tunnel_hostname: Option<String>,
    pub cf_tunnel_created_at: Option<DateTime<Utc>>,

    // Sync tracking
    pub last_sync_at: Option<DateTime<Utc>>,
    pub sync_interval_minutes: u32,

    // WebSocket tracking
    pub pusher_socket_id: Option<String>,
    pub websocket_status: WebSocketStatus,
    pub last_websocket_connect: Option<DateTime<Utc>>,
    pub last_websocket_disconnect: Option<DateTime<Utc>>,
    pub last_heartbeat: Option<DateTime<Utc>>,

    // Health monitoring
    pub health_metrics: HealthMetrics,
    pub buffer_status: BufferStatus,

    // Version tracking
    pub horses_version: u32,

    // Settings
    pub settings: Value,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Barn creation request
///
/// Stall count is not set here; stalls are configured on the edge device
/// during setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBarnRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub package_type: PackageType,
}

/// Barn update request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBarnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Barn adoption request from an edge device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptBarnRequest {
    pub adoption_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_url: Option<String>,
}

/// Pusher channel credentials handed out at adoption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PusherConfig {
    pub key: String,
    pub cluster: String,
    pub channel: String,
}

/// Barn adoption response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptBarnResponse {
    pub barn_id: String,
    pub api_key: String,
    pub barn: Barn,
    pub horses: Vec<BarnConfigHorse>,
    pub pusher_config: PusherConfig,
}

/// Stall config sent to edge/dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarnConfigStall {
    pub id: String,
    pub name: String,
    pub sensors: StallSensors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
}

/// Sensor entity IDs assigned to a stall
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StallSensors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
}

/// Camera config sent to edge/dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarnConfigCamera {
    pub name: String,
    pub ip: String,
    pub enabled: bool,
}

/// Device placement on the floorplan image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorplanDevice {
    pub device_id: String,
    pub x: f64,
    pub y: f64,
}

/// Floorplan config sent to edge/dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarnConfigFloorplan {
    pub image_url: String,
    pub devices: Vec<FloorplanDevice>,
}

/// Barn descriptor inside [`BarnConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarnConfigBarn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Complete barn config sent from the cloud to the edge/dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarnConfig {
    pub barn: BarnConfigBarn,
    pub stalls: Vec<BarnConfigStall>,
    pub horses: Vec<BarnConfigHorse>,
    pub cameras: Vec<BarnConfigCamera>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floorplan: Option<BarnConfigFloorplan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_interval_seconds: Option<u64>,
}
