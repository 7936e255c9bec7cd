//! End-to-end exercise of the contracts the way the two services use
//! them: an edge config document is guarded and refined, buffered
//! readings cross the timestamp boundary, and a pending command is
//! decoded and acknowledged.

use contracts::command::{AdjustSyncIntervalPayload, CloudCommand, CommandStatus};
use contracts::config::{ConfigDevice, ConfigSyncResult};
use contracts::device::{EdgeReading, ReadingType};
use contracts::transform::{
    camel_to_snake, iso_to_unix, minutes_to_seconds, reading_to_cloud, reading_to_edge,
    snake_to_camel,
};
use contracts::{CommandAction, EdgeConfig, is_edge_config, is_stall_location};
use serde_json::json;

fn sample_config_doc() -> serde_json::Value {
    json!({
        "version": "1.0",
        "created": "2024-01-15T08:00:00Z",
        "last_modified": "2024-02-01T09:30:00Z",
        "barn": {
            "name": "North Barn",
            "stall_count": 2,
            "floorplan": { "image": "plan.png", "width": 1600, "height": 900 },
            "bindings": { "ha_area_id": "barn" },
        },
        "stalls": [
            {
                "id": "stall_1",
                "number": 1,
                "name": "Stall 1",
                "bindings": { "ha_area_id": "stall_1" },
            },
            {
                "id": "stall_2",
                "number": 2,
                "name": "Stall 2",
                "floorplan": { "x": 40.0, "y": 12.5 },
                "bindings": { "ha_area_id": "stall_2" },
            },
        ],
        "devices": [
            {
                "uid": "camera_a1b2c3d4",
                "type": "camera",
                "label": "Aisle camera",
                "location": "barn",
                "bindings": { "frigate_name": "aisle", "ip": "10.0.0.20" },
            },
            {
                "uid": "gate_sensor_0badf00d",
                "type": "gate_sensor",
                "label": "Stall 1 gate",
                "location": "stall_1",
                "bindings": { "zwave_node_id": 7 },
            },
        ],
    })
}

#[test]
fn adoption_guards_then_refines_the_config_document() {
    let doc = sample_config_doc();
    assert!(is_edge_config(&doc));

    let config: EdgeConfig = serde_json::from_value(doc).unwrap();
    assert_eq!(config.devices.len(), 2);

    // Stall-located devices map to cloud stalls, barn-located ones do not
    let locations: Vec<bool> = config
        .devices
        .iter()
        .map(|device| is_stall_location(&device.location))
        .collect();
    assert_eq!(locations, vec![false, true]);

    let mut result = ConfigSyncResult::default();
    for stall in &config.stalls {
        result.stalls_created += 1;
        result
            .stall_mappings
            .insert(stall.id.clone(), format!("cloud-{}", stall.number));
    }
    assert_eq!(result.stalls_created, 2);
    assert_eq!(result.stall_mappings["stall_1"], "cloud-1");
}

#[test]
fn tampered_documents_fail_the_guard() {
    let mut doc = sample_config_doc();
    doc["version"] = json!("0.9");
    assert!(!is_edge_config(&doc));

    let mut doc = sample_config_doc();
    doc["stalls"] = json!({});
    assert!(!is_edge_config(&doc));
}

#[test]
fn readings_cross_the_timestamp_boundary_losslessly() {
    let buffered = EdgeReading {
        edge_device_id: ConfigDevice::generate_uid(contracts::DeviceType::ClimateSensor),
        reading_type: ReadingType::Humidity,
        value_text: None,
        value_numeric: Some(54.0),
        value_boolean: None,
        value_json: None,
        timestamp: 1_700_000_000,
    };

    let uploaded = reading_to_cloud(&buffered).unwrap();
    let wire = serde_json::to_value(&uploaded).unwrap();
    assert_eq!(wire["timestamp"], json!("2023-11-14T22:13:20Z"));
    assert_eq!(
        iso_to_unix(wire["timestamp"].as_str().unwrap()).unwrap(),
        1_700_000_000
    );

    assert_eq!(reading_to_edge(&uploaded), buffered);
}

#[test]
fn pending_command_decodes_and_reaches_a_terminal_state() {
    let doc = json!({
        "id": "cmd-1",
        "barnId": "barn-1",
        "action": "adjust_sync_interval",
        "data": { "intervalMinutes": 5, "durationMinutes": 60 },
        "status": "pending",
        "createdAt": "2024-02-01T09:30:00Z",
        "priority": "normal",
        "deliveryMethod": "websocket",
        "sentAt": null,
        "acknowledgedAt": null,
        "errorMessage": null,
        "expiresAt": "2024-02-01T10:30:00Z",
        "idempotencyKey": null,
    });

    let mut command: CloudCommand = serde_json::from_value(doc).unwrap();
    assert_eq!(command.command.action, CommandAction::AdjustSyncInterval);
    assert!(!command.command.status.is_terminal());

    let payload: AdjustSyncIntervalPayload =
        serde_json::from_value(command.command.data.clone()).unwrap();
    assert_eq!(minutes_to_seconds(payload.interval_minutes.into()), 300);

    command.command.status = CommandStatus::Acknowledged;
    assert!(command.command.status.is_terminal());
}

#[test]
fn edge_payloads_translate_between_casing_conventions() {
    // An edge-native snake_case bag rendered for a cloud consumer and back
    let edge_side = json!({
        "buffer_status": {
            "events_queued": 3,
            "oldest_queued_timestamp": "2024-02-01T09:00:00Z",
        },
        "stall_ids": ["stall_1", "stall_2"],
    });

    let cloud_side = snake_to_camel(&edge_side);
    assert_eq!(
        cloud_side,
        json!({
            "bufferStatus": {
                "eventsQueued": 3,
                "oldestQueuedTimestamp": "2024-02-01T09:00:00Z",
            },
            "stallIds": ["stall_1", "stall_2"],
        })
    );

    assert_eq!(camel_to_snake(&cloud_side), edge_side);
}
