//! Edge-owned barn configuration document.
//!
//! The edge device is the source of truth for this document; the cloud
//! only reads it during the adoption/config-sync exchange and maps the
//! edge identifiers into its own stall/device records, replacing the whole
//! document on each sync.

mod device;
mod floorplan;
mod stall;

pub use device::{ConfigDevice, DeviceBindings, HaEntityClass, entity_classes};
pub use floorplan::{FloorplanConfig, FloorplanPosition};
pub use stall::{ConfigStall, StallBindings};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version tag carried by every [`EdgeConfig`] document
pub const CONFIG_VERSION: &str = "1.0";

/// Home Assistant bindings at the barn level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarnBindings {
    pub ha_area_id: String,
}

/// Barn-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigBarn {
    pub name: String,
    pub stall_count: u32,
    pub floorplan: FloorplanConfig,
    pub bindings: BarnBindings,
}

/// Complete barn configuration produced by an edge device
///
/// Serialized in the edge's native snake_case convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub version: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub barn: ConfigBarn,
    pub stalls: Vec<ConfigStall>,
    pub devices: Vec<ConfigDevice>,
}

impl EdgeConfig {
    /// Creates an empty config document stamped with the current version
    /// tag and timestamps.
    pub fn new(barn: ConfigBarn, now: DateTime<Utc>) -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            created: now,
            last_modified: now,
            barn,
            stalls: Vec::new(),
            devices: Vec::new(),
        }
    }
}

/// Shallow shape check for an [`EdgeConfig`] document.
///
/// Inspects only the top level: the value must be an object whose
/// `version` equals `"1.0"`, whose `devices` and `stalls` are arrays, and
/// whose `barn` is an object. Element shapes, UID formats, and enum
/// membership are not validated here; deserialize into [`EdgeConfig`] for
/// full refinement. Never errors, returns false for any malformed input.
pub fn is_edge_config(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    obj.get("version").and_then(Value::as_str) == Some(CONFIG_VERSION)
        && obj.get("devices").is_some_and(Value::is_array)
        && obj.get("stalls").is_some_and(Value::is_array)
        && obj.get("barn").is_some_and(Value::is_object)
}

/// Returns true when a device location names a stall (`stall_<digits>`)
/// rather than the barn at large. Case-sensitive, anchored: `"stall_1a"`,
/// `"Stall_1"`, and `"stall_"` are all false.
pub fn is_stall_location(location: &str) -> bool {
    match location.strip_prefix("stall_") {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Result of syncing an edge config document into cloud records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSyncResult {
    pub stalls_created: u32,
    pub stalls_updated: u32,
    pub devices_created: u32,
    pub devices_updated: u32,
    /// Edge stall ID -> cloud stall UUID
    pub stall_mappings: HashMap<String, String>,
    /// Cloud device UUID -> edge device UID
    pub device_mappings: HashMap<String, String>,
}
