use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FloorplanPosition;
use crate::device::DeviceType;

/// Home Assistant `device_class` values the system tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaEntityClass {
    Door,
    Temperature,
    Humidity,
    Battery,
    Smoke,
    CarbonMonoxide,
    Motion,
    Occupancy,
}

/// Device bindings. The device type determines which fields are used;
/// all fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceBindings {
    /// Frigate camera name (cameras only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frigate_name: Option<String>,
    /// Camera IP address (cameras only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Home Assistant device registry ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_device_id: Option<String>,
    /// Z-Wave node ID (Z-Wave sensors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zwave_node_id: Option<u32>,
    /// Home Assistant entity selection map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_entities: Option<HashMap<HaEntityClass, Option<String>>>,
}

/// Device entry in the edge config document
///
/// UID format: `{type}_{random8}`, e.g. `camera_a1b2c3d4`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDevice {
    pub uid: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    /// Human-readable device label
    pub label: String,
    /// `"barn"` or a stall ID such as `"stall_1"`
    pub location: String,
    /// Position on the floorplan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floorplan: Option<FloorplanPosition>,
    pub bindings: DeviceBindings,
}

impl ConfigDevice {
    /// Generates a device UID: the type tag plus a random 8-character
    /// hex suffix.
    pub fn generate_uid(device_type: DeviceType) -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("{}_{}", device_type.as_str(), &uuid[..8])
    }
}

/// HA entity classes a given device type reports
pub fn entity_classes(device_type: DeviceType) -> &'static [HaEntityClass] {
    use HaEntityClass::*;
    match device_type {
        DeviceType::Camera => &[Occupancy, Motion],
        DeviceType::GateSensor => &[Door, Battery],
        DeviceType::WaterSensor => &[Humidity, Battery],
        DeviceType::ClimateSensor => &[Temperature, Humidity, Battery],
        DeviceType::MotionSensor => &[Motion, Battery],
        DeviceType::GpsTracker => &[],
    }
}
