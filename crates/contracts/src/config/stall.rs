use serde::{Deserialize, Serialize};

use super::FloorplanPosition;

/// Home Assistant bindings for a stall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StallBindings {
    pub ha_area_id: String,
}

/// Stall entry in the edge config document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigStall {
    /// Stall ID (e.g. "stall_1")
    pub id: String,
    /// Stall number, 1-indexed
    pub number: u32,
    pub name: String,
    /// Position on the barn floorplan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floorplan: Option<FloorplanPosition>,
    pub bindings: StallBindings,
}
