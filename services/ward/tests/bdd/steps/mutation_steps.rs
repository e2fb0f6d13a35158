//! Step definitions for create, update and delete calls

use cucumber::{given, then, when};
use ward::{WardApi, WardError};
use ward_types::{DoctorUpdate, NewPatient};

use crate::world::WardWorld;

// --- Given steps ---

#[given(expr = "the backend answers {word} {string} with status {int} and body {string}")]
fn backend_answers(world: &mut WardWorld, method: String, path: String, status: u16, body: String) {
    world.backend.route(&method, &path, status, body);
}

// --- When steps ---

#[when(expr = "room {int} is updated to capacity {int} and availability {string}")]
async fn update_room(world: &mut WardWorld, id: i64, capacity: u32, availability: String) {
    let api = world.api();
    let outcome = api.update_room(id, capacity, &availability).await;
    world.last_outcome = Some(outcome.map(|_| ()));
}

#[when(expr = "patient {string} is added to room {int}")]
async fn add_patient(world: &mut WardWorld, name: String, room_id: i64) {
    let api = world.api();
    let outcome = api
        .create_and_add_patient_to_room(&NewPatient { name }, room_id)
        .await;
    world.last_outcome = Some(outcome.map(|_| ()));
}

#[when(expr = "patient {int} is deleted")]
async fn delete_patient(world: &mut WardWorld, id: i64) {
    let api = world.api();
    world.last_outcome = Some(api.delete_patient_by_id(id).await);
}

#[when(expr = "doctor {int} changes phone number to {string}")]
async fn update_doctor_phone(world: &mut WardWorld, id: i64, phone_number: String) {
    let api = world.api();
    let update = DoctorUpdate {
        phone_number: Some(phone_number),
        ..Default::default()
    };
    let outcome = api.update_doctor_info(id, &update).await;
    world.last_outcome = Some(outcome.map(|_| ()));
}

// --- Then steps ---

#[then("the operation should succeed")]
fn operation_succeeded(world: &mut WardWorld) {
    match world.last_outcome.as_ref().expect("no operation ran") {
        Ok(()) => {}
        Err(e) => panic!("expected success, got {}", e),
    }
}

#[then(expr = "the operation should fail with {string}")]
fn operation_failed_with(world: &mut WardWorld, expected: String) {
    match world.last_outcome.as_ref().expect("no operation ran") {
        Err(e) => assert_eq!(e.to_string(), expected),
        Ok(()) => panic!("expected failure {:?}", expected),
    }
}

#[then("the operation should fail validation")]
fn operation_failed_validation(world: &mut WardWorld) {
    let outcome = world.last_outcome.as_ref().expect("no operation ran");
    assert!(
        matches!(outcome, Err(WardError::Validation(_))),
        "expected validation error, got {:?}",
        outcome
    );
}

#[then("no requests should have been made")]
fn no_requests(world: &mut WardWorld) {
    assert!(world.backend.requests().is_empty());
}

#[then(expr = "the last request should be {word} {string}")]
fn last_request(world: &mut WardWorld, method: String, url: String) {
    let requests = world.backend.requests();
    let last = requests.last().expect("no request was made");
    assert_eq!(last.method, method);
    assert_eq!(last.url, url);
}

#[then(expr = "the last request body should have {string} set to {string}")]
fn last_request_body(world: &mut WardWorld, field: String, expected: String) {
    let requests = world.backend.requests();
    let last = requests.last().expect("no request was made");
    let body = last.body.as_ref().expect("request had no body");
    assert_eq!(body[field.as_str()], serde_json::Value::String(expected));
}
