//! Ward - hospital-room monitoring client
//!
//! Fetches rooms, sensors, patients and doctors from the ward REST backend,
//! composes them into room and sensor log views, and renders those views.

pub mod api_client;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod render;
pub mod room_view;
pub mod sensor_log;

pub use api_client::{ApiClient, WardApi};
pub use config::{load_config, ApiConfig, Config};
pub use error::{Result, WardError};

use std::sync::Arc;

use crate::commands::Command;
use crate::io::ReqwestHttpClient;

/// Execute one command against the configured backend
pub async fn run(config: &Config, command: Command) -> Result<String> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new(&config.api)?);
    let api = ApiClient::new(&config.api, http);

    tracing::debug!("Executing {:?} against {}", command, api.base_url());
    commands::execute(&api, command).await
}
