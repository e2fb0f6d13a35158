//! Sensor log view: per-sensor history fetched fail-soft

use futures::future::join_all;
use ward_types::{SensorDescriptor, SensorLogTable};

use crate::api_client::WardApi;

/// Fetch every sensor's log concurrently and build the table.
///
/// A failing sensor is skipped; the siblings still render. The first
/// failure, in the order the sensors were given, becomes the banner.
pub async fn load_sensor_log(
    api: &dyn WardApi,
    sensors: &[SensorDescriptor],
) -> SensorLogTable {
    let results = join_all(sensors.iter().map(|sensor| async move {
        let result = api.fetch_sensor_log_by_id(sensor.id).await;
        if let Err(e) = &result {
            tracing::debug!("Skipping sensor {} in log: {}", sensor.id, e);
        }
        result.map(|record| record.values)
    }))
    .await;

    let table = SensorLogTable::collect(sensors, results);
    tracing::debug!(
        "Sensor log for {} sensors: {} rows",
        sensors.len(),
        table.rows.len()
    );
    table
}
