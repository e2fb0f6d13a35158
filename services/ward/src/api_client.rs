//! REST client for the ward backend
//!
//! Every operation returns a typed [`crate::WardError`] on failure and logs
//! the failure; deciding how to show it to a user is left to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use ward_types::{Availability, Doctor, DoctorUpdate, NewPatient, Patient, Room, Sensor};

use crate::config::ApiConfig;
use crate::io::{HttpClient, HttpResponse};
use crate::WardError;

/// Operations offered by the ward backend
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait WardApi: Send + Sync {
    /// Fetch a room and merge each referenced sensor's value history into it.
    /// Any failing sensor fetch fails the whole call.
    async fn fetch_room_details_by_id(&self, room_id: i64) -> crate::Result<Room>;

    /// Fetch the sensor records listed for a room
    async fn fetch_sensor_data_by_room_id(&self, room_id: i64) -> crate::Result<Vec<Sensor>>;

    /// Fetch a single sensor record, including its value history
    async fn fetch_sensor_log_by_id(&self, sensor_id: i64) -> crate::Result<Sensor>;

    /// Fetch the patients placed in a room
    async fn fetch_patients_by_room_id(&self, room_id: i64) -> crate::Result<Vec<Patient>>;

    async fn get_doctor_by_id(&self, doctor_id: i64) -> crate::Result<Doctor>;

    async fn delete_doctor_by_id(&self, doctor_id: i64) -> crate::Result<()>;

    /// Patch the fields set in `update`. Returns the updated doctor when the
    /// backend echoes it.
    async fn update_doctor_info(
        &self,
        doctor_id: i64,
        update: &DoctorUpdate,
    ) -> crate::Result<Option<Doctor>>;

    async fn create_and_add_patient_to_room(
        &self,
        patient: &NewPatient,
        room_id: i64,
    ) -> crate::Result<Patient>;

    async fn delete_patient_by_id(&self, patient_id: i64) -> crate::Result<()>;

    async fn get_patient_by_id(&self, patient_id: i64) -> crate::Result<Patient>;

    /// Validate `availability` locally, then patch the room. No request is
    /// sent when validation fails.
    async fn update_room(
        &self,
        room_id: i64,
        capacity: u32,
        availability: &str,
    ) -> crate::Result<Option<Room>>;
}

/// [`WardApi`] over HTTP
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created ApiClient for {}", base_url);
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn url_with_query(&self, path: &str, params: &[(&str, &str)]) -> crate::Result<String> {
        reqwest::Url::parse_with_params(&self.url(path), params)
            .map(String::from)
            .map_err(|e| WardError::Url(format!("{}{}: {}", self.base_url, path, e)))
    }

    async fn room_details(&self, room_id: i64) -> crate::Result<Room> {
        let url = self.url(&format!("/Rooms/{}", room_id));
        tracing::debug!("fetch_room_details_by_id URL: {}", url);

        let response = expect_success(self.http.get(&url).await?, |r| {
            format!("Error fetching room data: {}", r.status_text())
        })?;
        let mut room: Room = decode(&response)?;

        let sensors = std::mem::take(&mut room.sensors);
        room.sensors = try_join_all(sensors.into_iter().map(|s| self.with_history(s))).await?;

        tracing::debug!(
            "fetch_room_details_by_id: room '{}' with {} sensors",
            room.name,
            room.sensors.len()
        );
        Ok(room)
    }

    /// Replace a sensor's values with the history from its own record
    async fn with_history(&self, mut sensor: Sensor) -> crate::Result<Sensor> {
        let record = self.sensor_record(sensor.id).await?;
        sensor.values = record.values;
        Ok(sensor)
    }

    async fn sensor_record(&self, sensor_id: i64) -> crate::Result<Sensor> {
        let url = self.url(&format!("/Sensors/{}", sensor_id));
        tracing::debug!("fetch_sensor_log_by_id URL: {}", url);

        let response = expect_success(self.http.get(&url).await?, |r| {
            format!(
                "Error fetching sensor logs: {} | URL: {}",
                r.status_text(),
                url
            )
        })?;
        decode(&response)
    }

    async fn sensors_for_room(&self, room_id: i64) -> crate::Result<Vec<Sensor>> {
        let room_id = room_id.to_string();
        let url = self.url_with_query("/Sensors", &[("roomId", room_id.as_str())])?;
        tracing::debug!("fetch_sensor_data_by_room_id URL: {}", url);

        let response = expect_success(self.http.get(&url).await?, |r| {
            format!("Error fetching sensor data: {}", r.status_text())
        })?;
        decode(&response)
    }

    async fn patients_for_room(&self, room_id: i64) -> crate::Result<Vec<Patient>> {
        let room_id = room_id.to_string();
        let url = self.url_with_query("/Patients", &[("roomId", room_id.as_str())])?;
        let response = expect_success(self.http.get(&url).await?, |r| {
            format!("Failed to get patients: {}", r.body)
        })?;
        decode(&response)
    }

    async fn doctor(&self, doctor_id: i64) -> crate::Result<Doctor> {
        let url = self.url(&format!("/Doctors/{}", doctor_id));
        let response = expect_success(self.http.get(&url).await?, |r| {
            format!("Failed to get doctor: {}", r.body)
        })?;
        decode(&response)
    }

    async fn remove_doctor(&self, doctor_id: i64) -> crate::Result<()> {
        let url = self.url(&format!("/Doctors/{}", doctor_id));
        expect_success(self.http.delete(&url).await?, |r| {
            format!("Failed to delete doctor: {}", r.body)
        })?;
        Ok(())
    }

    async fn patch_doctor(
        &self,
        doctor_id: i64,
        update: &DoctorUpdate,
    ) -> crate::Result<Option<Doctor>> {
        let url = self.url_with_query(
            &format!("/Doctors/{}", doctor_id),
            &update.query_params(),
        )?;
        tracing::debug!("Updating doctor {}: {:?}", doctor_id, update);

        let response = expect_success(self.http.patch(&url).await?, |r| {
            format!("Failed to update doctor: {}", r.body)
        })?;
        decode_optional(&response)
    }

    async fn add_patient(&self, patient: &NewPatient, room_id: i64) -> crate::Result<Patient> {
        let room_id = room_id.to_string();
        let url = self.url_with_query("/Patients", &[("roomId", room_id.as_str())])?;
        let body = serde_json::to_value(patient)?;

        let response = expect_success(self.http.post_json(&url, &body).await?, |r| {
            format!("Failed to add patient: {}", r.body)
        })?;
        decode(&response)
    }

    async fn remove_patient(&self, patient_id: i64) -> crate::Result<()> {
        let url = self.url(&format!("/Patients/{}", patient_id));
        expect_success(self.http.delete(&url).await?, |r| {
            format!("Failed to delete patient: {}", r.body)
        })?;
        Ok(())
    }

    async fn patient(&self, patient_id: i64) -> crate::Result<Patient> {
        let url = self.url(&format!("/Patients/{}", patient_id));
        let response = expect_success(self.http.get(&url).await?, |r| {
            format!("Failed to get patient: {}", r.body)
        })?;
        decode(&response)
    }

    async fn patch_room(
        &self,
        room_id: i64,
        capacity: u32,
        availability: &str,
    ) -> crate::Result<Option<Room>> {
        let availability: Availability = availability.parse()?;

        tracing::debug!(
            "Updating room {} with capacity {} and availability {}",
            room_id,
            capacity,
            availability
        );
        let capacity = capacity.to_string();
        let url = self.url_with_query(
            &format!("/Rooms/{}", room_id),
            &[
                ("capacity", capacity.as_str()),
                ("availability", availability.as_str()),
            ],
        )?;

        let response = expect_success(self.http.patch(&url).await?, |r| {
            format!("Failed to update room: {}", r.body)
        })?;
        decode_optional(&response)
    }
}

#[async_trait]
impl WardApi for ApiClient {
    async fn fetch_room_details_by_id(&self, room_id: i64) -> crate::Result<Room> {
        logged("fetch_room_details_by_id", self.room_details(room_id).await)
    }

    async fn fetch_sensor_data_by_room_id(&self, room_id: i64) -> crate::Result<Vec<Sensor>> {
        logged(
            "fetch_sensor_data_by_room_id",
            self.sensors_for_room(room_id).await,
        )
    }

    async fn fetch_sensor_log_by_id(&self, sensor_id: i64) -> crate::Result<Sensor> {
        logged("fetch_sensor_log_by_id", self.sensor_record(sensor_id).await)
    }

    async fn fetch_patients_by_room_id(&self, room_id: i64) -> crate::Result<Vec<Patient>> {
        logged(
            "fetch_patients_by_room_id",
            self.patients_for_room(room_id).await,
        )
    }

    async fn get_doctor_by_id(&self, doctor_id: i64) -> crate::Result<Doctor> {
        logged("get_doctor_by_id", self.doctor(doctor_id).await)
    }

    async fn delete_doctor_by_id(&self, doctor_id: i64) -> crate::Result<()> {
        logged("delete_doctor_by_id", self.remove_doctor(doctor_id).await)
    }

    async fn update_doctor_info(
        &self,
        doctor_id: i64,
        update: &DoctorUpdate,
    ) -> crate::Result<Option<Doctor>> {
        logged(
            "update_doctor_info",
            self.patch_doctor(doctor_id, update).await,
        )
    }

    async fn create_and_add_patient_to_room(
        &self,
        patient: &NewPatient,
        room_id: i64,
    ) -> crate::Result<Patient> {
        logged(
            "create_and_add_patient_to_room",
            self.add_patient(patient, room_id).await,
        )
    }

    async fn delete_patient_by_id(&self, patient_id: i64) -> crate::Result<()> {
        logged("delete_patient_by_id", self.remove_patient(patient_id).await)
    }

    async fn get_patient_by_id(&self, patient_id: i64) -> crate::Result<Patient> {
        logged("get_patient_by_id", self.patient(patient_id).await)
    }

    async fn update_room(
        &self,
        room_id: i64,
        capacity: u32,
        availability: &str,
    ) -> crate::Result<Option<Room>> {
        logged(
            "update_room",
            self.patch_room(room_id, capacity, availability).await,
        )
    }
}

fn logged<T>(operation: &str, result: crate::Result<T>) -> crate::Result<T> {
    if let Err(e) = &result {
        tracing::warn!("Error in {}: {}", operation, e);
    }
    result
}

fn expect_success(
    response: HttpResponse,
    describe: impl FnOnce(&HttpResponse) -> String,
) -> crate::Result<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(WardError::Status {
            status: response.status,
            message: describe(&response),
        })
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> crate::Result<T> {
    Ok(serde_json::from_str(&response.body)?)
}

/// Mutations may answer with an empty body (204 No Content)
fn decode_optional<T: DeserializeOwned>(response: &HttpResponse) -> crate::Result<Option<T>> {
    if response.body.trim().is_empty() {
        return Ok(None);
    }
    decode(response).map(Some)
}
