//! Horse records. The cloud is the source of truth; edge devices receive
//! a trimmed-down sync view.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::device::{DeviceStatus, DeviceType};

/// Horse sex options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorseSex {
    Mare,
    Gelding,
    Stallion,
    Filly,
    Colt,
}

/// Full horse record (cloud database)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    pub id: String,
    pub barn_id: Option<String>,
    pub owner_id: Option<String>,
    pub name: String,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub sex: Option<HorseSex>,
    pub birth_date: Option<NaiveDate>,
    pub owner_name: Option<String>,
    pub owner_contact: Option<String>,
    pub notes: Option<String>,
    pub profile_image_url: Option<String>,
    pub vet_contact: Option<String>,
    pub farrier_contact: Option<String>,
    pub feeding_instructions: Option<String>,
    pub assigned_stall_id: Option<String>,
    pub settings: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Simplified horse for edge device sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeHorse {
    pub id: String,
    pub name: String,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub assigned_stall_id: Option<String>,
}

/// Horse entry in the barn config sent to edge/dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarnConfigHorse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_stall: Option<String>,
}

/// Horse creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHorseRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<HorseSex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farrier_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeding_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barn_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_stall_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Horse update request; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHorseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<HorseSex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farrier_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeding_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_stall_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// Assign horse to barn request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignHorseToBarnRequest {
    pub barn_code: String,
}

/// Horses sync response for edge devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorsesSyncResponse {
    pub horses: Vec<Horse>,
    pub version: u32,
}

/// Latest reading for a device sensor, dashboard view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLatestReading {
    pub reading_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_numeric: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,
    pub timestamp: DateTime<Utc>,
}

/// Simplified device for a horse's stall display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StallDevice {
    pub id: String,
    pub stall_id: Option<String>,
    pub name: String,
    pub device_type: DeviceType,
    pub status: DeviceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Latest sensor reading for this device, if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_reading: Option<DeviceLatestReading>,
}
