use chrono::DateTime;

use crate::device::{DeviceReading, EdgeReading};
use crate::error::{ContractError, Result};

/// Convert an edge-buffered reading to the cloud representation.
///
/// Every shared field is carried over unchanged, including which value
/// slot is populated; only the timestamp changes encoding, from Unix
/// seconds to an instant. Cloud-only fields start empty.
pub fn reading_to_cloud(reading: &EdgeReading) -> Result<DeviceReading> {
    let timestamp = DateTime::from_timestamp(reading.timestamp, 0).ok_or_else(|| {
        ContractError::InvalidTimestamp(format!("seconds out of range: {}", reading.timestamp))
    })?;

    Ok(DeviceReading {
        id: None,
        edge_device_id: reading.edge_device_id.clone(),
        device_id: None,
        barn_id: None,
        reading_type: reading.reading_type,
        value_text: reading.value_text.clone(),
        value_numeric: reading.value_numeric,
        value_boolean: reading.value_boolean,
        value_json: reading.value_json.clone(),
        timestamp,
        created_at: None,
    })
}

/// Convert a cloud reading to the edge representation.
///
/// The timestamp becomes Unix seconds, floored; cloud-only fields are
/// dropped. Round-trips with [`reading_to_cloud`] at one-second
/// granularity.
pub fn reading_to_edge(reading: &DeviceReading) -> EdgeReading {
    EdgeReading {
        edge_device_id: reading.edge_device_id.clone(),
        reading_type: reading.reading_type,
        value_text: reading.value_text.clone(),
        value_numeric: reading.value_numeric,
        value_boolean: reading.value_boolean,
        value_json: reading.value_json.clone(),
        timestamp: reading.timestamp.timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ReadingType;
    use crate::transform::date_to_iso;
    use serde_json::json;

    fn edge_reading() -> EdgeReading {
        EdgeReading {
            edge_device_id: "climate_sensor_a1b2c3d4".to_string(),
            reading_type: ReadingType::Temperature,
            value_text: None,
            value_numeric: Some(21.5),
            value_boolean: None,
            value_json: None,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_reading_to_cloud_converts_only_timestamp() {
        let cloud = reading_to_cloud(&edge_reading()).unwrap();

        assert_eq!(cloud.edge_device_id, "climate_sensor_a1b2c3d4");
        assert_eq!(cloud.reading_type, ReadingType::Temperature);
        assert_eq!(cloud.value_numeric, Some(21.5));
        assert!(cloud.value_text.is_none());
        assert_eq!(date_to_iso(cloud.timestamp), "2023-11-14T22:13:20.000Z");
        assert!(cloud.id.is_none());
        assert!(cloud.barn_id.is_none());
    }

    #[test]
    fn test_roundtrip_at_second_granularity() {
        let original = edge_reading();
        let back = reading_to_edge(&reading_to_cloud(&original).unwrap());
        assert_eq!(back, original);
    }

    #[test]
    fn test_value_slots_are_preserved() {
        let mut reading = edge_reading();
        reading.value_numeric = None;
        reading.value_json = Some(json!({ "lat": 39.7, "lng": -104.9 }));

        let cloud = reading_to_cloud(&reading).unwrap();
        assert_eq!(cloud.value_json, reading.value_json);
        assert!(cloud.value_numeric.is_none());

        assert_eq!(reading_to_edge(&cloud), reading);
    }

    #[test]
    fn test_out_of_range_timestamp_is_an_error() {
        let mut reading = edge_reading();
        reading.timestamp = i64::MAX;
        assert!(matches!(
            reading_to_cloud(&reading),
            Err(ContractError::InvalidTimestamp(_))
        ));
    }
}
