use serde::{Deserialize, Serialize};

/// Position on a floorplan image, percentage-based (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorplanPosition {
    pub x: f64,
    pub y: f64,
}

/// Floorplan image metadata for a barn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorplanConfig {
    pub image: String,
    pub width: u32,
    pub height: u32,
}
