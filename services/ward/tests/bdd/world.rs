//! BDD test world for the ward client

use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cucumber::World;
use ward::io::{HttpClient, HttpResponse};
use ward::room_view::RoomView;
use ward::{ApiClient, ApiConfig, WardError};
use ward_types::{SensorDescriptor, SensorLogEntry, SensorLogTable};

pub const BASE_URL: &str = "http://ward.test";

/// A request seen by the scripted backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// In-memory backend answering from a route table; unknown routes get 404
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    routes: Mutex<HashMap<String, HttpResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedHttpClient {
    pub fn route(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.routes.lock().unwrap().insert(
            format!("{} {}{}", method, BASE_URL, path),
            HttpResponse {
                status,
                body: body.into(),
            },
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, method: &str, url: &str, body: Option<serde_json::Value>) -> HttpResponse {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            body,
        });
        self.routes
            .lock()
            .unwrap()
            .get(&format!("{} {}", method, url))
            .cloned()
            .unwrap_or(HttpResponse {
                status: 404,
                body: String::new(),
            })
    }
}

#[async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn get(&self, url: &str) -> ward::Result<HttpResponse> {
        Ok(self.respond("GET", url, None))
    }

    async fn delete(&self, url: &str) -> ward::Result<HttpResponse> {
        Ok(self.respond("DELETE", url, None))
    }

    async fn patch(&self, url: &str) -> ward::Result<HttpResponse> {
        Ok(self.respond("PATCH", url, None))
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> ward::Result<HttpResponse> {
        Ok(self.respond("POST", url, Some(body.clone())))
    }
}

/// A sensor as the scenario describes it
#[derive(Debug, Clone)]
pub struct ScenarioSensor {
    pub id: i64,
    pub sensor_type: String,
    /// `Err(status)` makes the sensor's own record fail
    pub record: Result<serde_json::Value, u16>,
}

impl ScenarioSensor {
    pub fn with_values(id: i64, sensor_type: &str, values: Option<Vec<SensorLogEntry>>) -> Self {
        Self {
            id,
            sensor_type: sensor_type.to_string(),
            record: Ok(serde_json::json!({
                "id": id,
                "type": sensor_type,
                "values": values,
            })),
        }
    }

    pub fn descriptor(&self) -> SensorDescriptor {
        SensorDescriptor {
            id: self.id,
            sensor_type: self.sensor_type.clone(),
        }
    }
}

#[derive(Debug, Default, World)]
pub struct WardWorld {
    pub backend: Arc<ScriptedHttpClient>,

    // Room view testing
    pub room: Option<serde_json::Value>,
    pub room_failure: Option<u16>,
    pub sensors: Vec<ScenarioSensor>,
    pub room_view: Option<RoomView>,
    pub close_count: Arc<AtomicUsize>,
    pub requests_after_load: usize,

    // Sensor log testing
    pub sensor_log: Option<SensorLogTable>,

    // Mutation testing
    pub last_outcome: Option<Result<(), WardError>>,
}

impl WardWorld {
    pub fn api(&self) -> ApiClient {
        let config = ApiConfig {
            base_url: BASE_URL.to_string(),
            accept_invalid_certs: false,
        };
        ApiClient::new(&config, Arc::clone(&self.backend) as Arc<dyn HttpClient>)
    }

    /// Register every sensor's own record with the backend
    pub fn serve_sensor_records(&self) {
        for sensor in &self.sensors {
            let path = format!("/Sensors/{}", sensor.id);
            match &sensor.record {
                Ok(record) => self.backend.route("GET", &path, 200, record.to_string()),
                Err(status) => self.backend.route("GET", &path, *status, ""),
            }
        }
    }

    pub fn rendered_view(&self) -> String {
        let view = self.room_view.as_ref().expect("room view not loaded");
        ward::render::render_room_view(view)
    }
}
