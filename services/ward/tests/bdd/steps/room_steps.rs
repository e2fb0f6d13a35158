//! Step definitions for the room detail view

use std::sync::atomic::Ordering;
use std::sync::Arc;

use cucumber::{given, then, when};
use ward::room_view::{RoomView, RoomViewState};
use ward_types::SensorLogEntry;

use crate::world::{ScenarioSensor, WardWorld};

fn parse_readings(readings: &str) -> Vec<SensorLogEntry> {
    readings
        .split(',')
        .enumerate()
        .map(|(minute, value)| SensorLogEntry {
            time_stamp: format!("2023-05-30T10:{:02}:00Z", minute),
            value: value.trim().parse().expect("numeric reading"),
        })
        .collect()
}

// --- Given steps ---

#[given(expr = "room {int} named {string} with capacity {int} that is {string}")]
fn room_record(
    world: &mut WardWorld,
    id: i64,
    name: String,
    capacity: u32,
    availability: String,
) {
    world.room = Some(serde_json::json!({
        "id": id,
        "name": name,
        "capacity": capacity,
        "availability": availability,
        "sensors": [],
        "patients": [],
    }));
}

#[given(expr = "the room has a {string} sensor {int} with readings {string}")]
fn room_sensor_with_readings(world: &mut WardWorld, sensor_type: String, id: i64, readings: String) {
    world.sensors.push(ScenarioSensor::with_values(
        id,
        &sensor_type,
        Some(parse_readings(&readings)),
    ));
}

#[given(expr = "the room has a {string} sensor {int} whose record fails with status {int}")]
fn room_sensor_failing(world: &mut WardWorld, sensor_type: String, id: i64, status: u16) {
    world.sensors.push(ScenarioSensor {
        id,
        sensor_type,
        record: Err(status),
    });
}

#[given(expr = "the room has patients {string}")]
fn room_patients(world: &mut WardWorld, names: String) {
    let patients: Vec<_> = names
        .split(',')
        .enumerate()
        .map(|(i, name)| serde_json::json!({ "id": i + 1, "name": name.trim() }))
        .collect();
    let room = world.room.as_mut().expect("room not defined");
    room["patients"] = serde_json::Value::Array(patients);
}

#[given(expr = "the room record fails with status {int}")]
fn room_record_fails(world: &mut WardWorld, status: u16) {
    world.room_failure = Some(status);
}

// --- When steps ---

#[when("the room view is loaded")]
async fn load_room_view(world: &mut WardWorld) {
    let mut room = world.room.clone().expect("room not defined");
    let id = room["id"].as_i64().expect("room id");

    // The room record only references its sensors; histories live on the
    // sensor records.
    room["sensors"] = serde_json::Value::Array(
        world
            .sensors
            .iter()
            .map(|s| serde_json::json!({ "id": s.id, "type": s.sensor_type }))
            .collect(),
    );
    let sensor_list = room["sensors"].to_string();

    match world.room_failure {
        Some(status) => world
            .backend
            .route("GET", &format!("/Rooms/{}", id), status, ""),
        None => world
            .backend
            .route("GET", &format!("/Rooms/{}", id), 200, room.to_string()),
    }
    world
        .backend
        .route("GET", &format!("/Sensors?roomId={}", id), 200, sensor_list);
    world.serve_sensor_records();

    let close_count = Arc::clone(&world.close_count);
    let mut view = RoomView::new(id, move || {
        close_count.fetch_add(1, Ordering::SeqCst);
    });
    let api = world.api();
    view.load(&api).await;

    world.room_view = Some(view);
    world.requests_after_load = world.backend.requests().len();
}

#[when("the sensor log is toggled")]
fn toggle_sensor_log(world: &mut WardWorld) {
    let view = world.room_view.as_mut().expect("room view not loaded");
    view.toggle_sensor_log();
}

#[when("the view is closed")]
fn close_view(world: &mut WardWorld) {
    let view = world.room_view.as_mut().expect("room view not loaded");
    view.close();
}

// --- Then steps ---

#[then("the view should be ready")]
fn view_ready(world: &mut WardWorld) {
    let view = world.room_view.as_ref().expect("room view not loaded");
    assert!(
        matches!(view.state(), RoomViewState::Ready { .. }),
        "expected ready view, got {:?}",
        view.state()
    );
}

#[then(expr = "the view should show the error {string}")]
fn view_error(world: &mut WardWorld, expected: String) {
    let view = world.room_view.as_ref().expect("room view not loaded");
    match view.state() {
        RoomViewState::Failed { message } => assert_eq!(message, &expected),
        other => panic!("expected failed view, got {:?}", other),
    }
    assert!(world.rendered_view().starts_with("Error fetching room data:"));
}

#[then(expr = "the rendered view should contain {string}")]
fn rendered_contains(world: &mut WardWorld, expected: String) {
    let rendered = world.rendered_view();
    assert!(
        rendered.contains(&expected),
        "expected {:?} in:\n{}",
        expected,
        rendered
    );
}

#[then(expr = "sensor {int} should have latest value {float}")]
fn sensor_latest_value(world: &mut WardWorld, id: i64, expected: f64) {
    let view = world.room_view.as_ref().expect("room view not loaded");
    let details = view.details().expect("view not ready");
    let sensor = details
        .room
        .sensors
        .iter()
        .find(|s| s.id == id)
        .expect("sensor not in room");
    let latest = sensor.latest().expect("sensor has no readings");
    assert_eq!(latest.value, expected);
}

#[then(expr = "the close callback should have been called {int} time(s)")]
fn close_called(world: &mut WardWorld, expected: usize) {
    assert_eq!(world.close_count.load(Ordering::SeqCst), expected);
}

#[then("no further requests should have been made")]
fn no_further_requests(world: &mut WardWorld) {
    assert_eq!(world.backend.requests().len(), world.requests_after_load);
}
