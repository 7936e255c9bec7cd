//! Device and reading contracts shared by the edge agent and the cloud.
//!
//! Readings exist in two representations that differ only in how the
//! timestamp is encoded: the edge buffers Unix seconds ([`EdgeReading`]),
//! the cloud stores instants ([`DeviceReading`], serialized as ISO 8601).
//! The adapters in [`crate::transform`] bridge the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Device types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Camera,
    GateSensor,
    WaterSensor,
    GpsTracker,
    ClimateSensor,
    MotionSensor,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::GateSensor => "gate_sensor",
            Self::WaterSensor => "water_sensor",
            Self::GpsTracker => "gps_tracker",
            Self::ClimateSensor => "climate_sensor",
            Self::MotionSensor => "motion_sensor",
        }
    }
}

/// Device connection status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Online,
    Offline,
    Unknown,
}

impl Default for DeviceStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Types of readings devices can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingType {
    State,
    Level,
    Temperature,
    Humidity,
    Battery,
    Location,
    Motion,
    MotionDetected,
    OnlineStatus,
    Smoke,
    Co,
    WaterLevel,
    FeedLevel,
}

/// Device record as stored by the cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub barn_id: String,
    pub stall_id: Option<String>,
    pub name: String,
    pub device_type: DeviceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_device_id: Option<String>,
    pub status: DeviceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floorplan_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floorplan_y: Option<f64>,
    pub is_placeholder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One sensor observation, cloud representation
///
/// At most one value slot is populated per logical event; the contract does
/// not enforce exclusivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReading {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub edge_device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barn_id: Option<String>,
    pub reading_type: ReadingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_numeric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_json: Option<Value>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One sensor observation as buffered on the edge device
///
/// Field-for-field identical to [`DeviceReading`]'s shared core, except the
/// timestamp is Unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReading {
    pub edge_device_id: String,
    pub reading_type: ReadingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_numeric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_json: Option<Value>,
    /// Unix seconds
    pub timestamp: i64,
}

/// Query parameters for device readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReadingQuery {
    pub device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_type: Option<ReadingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Critical event sent from the edge for immediate notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalEvent {
    pub edge_device_id: String,
    pub sensor_type: String,
    pub reading_type: String,
    pub value: Value,
    pub timestamp: DateTime<Utc>,
}

/// Maps an edge sensor type tag to the cloud device type
pub fn device_type_for_sensor(sensor: &str) -> Option<DeviceType> {
    match sensor {
        "gates" => Some(DeviceType::GateSensor),
        "water" | "feed" => Some(DeviceType::WaterSensor),
        "temperature" | "smoke" | "co" => Some(DeviceType::ClimateSensor),
        "gps" => Some(DeviceType::GpsTracker),
        "camera" => Some(DeviceType::Camera),
        _ => None,
    }
}
