//! Client-side fetch helpers for the ward backend
//!
//! Same endpoints and error messages as the `ward` crate's `ApiClient`,
//! over the browser's fetch API.

use futures::future::{join_all, try_join, try_join_all};
use serde::de::DeserializeOwned;
use ward_types::{Room, RoomDetails, Sensor, SensorDescriptor, SensorLogTable};

/// Backend origin, fixed at build time
pub const API_BASE_URL: &str = match option_env!("WARD_API_BASE_URL") {
    Some(url) => url,
    None => "https://localhost:7216",
};

pub fn room_url(room_id: i64) -> String {
    format!("{}/Rooms/{}", API_BASE_URL, room_id)
}

pub fn sensor_url(sensor_id: i64) -> String {
    format!("{}/Sensors/{}", API_BASE_URL, sensor_id)
}

pub fn room_sensors_url(room_id: i64) -> String {
    format!("{}/Sensors?roomId={}", API_BASE_URL, room_id)
}

/// Fetch a room and give each of its sensors the history from its own record
pub async fn fetch_room_details_by_id(room_id: i64) -> Result<Room, String> {
    let mut room: Room = get_json(&room_url(room_id), |status| {
        format!("Error fetching room data: {}", status)
    })
    .await?;

    let sensors = std::mem::take(&mut room.sensors);
    room.sensors = try_join_all(sensors.into_iter().map(|mut sensor| async move {
        sensor.values = fetch_sensor_log_by_id(sensor.id).await?.values;
        Ok::<_, String>(sensor)
    }))
    .await?;
    Ok(room)
}

pub async fn fetch_sensor_data_by_room_id(room_id: i64) -> Result<Vec<Sensor>, String> {
    get_json(&room_sensors_url(room_id), |status| {
        format!("Error fetching sensor data: {}", status)
    })
    .await
}

pub async fn fetch_sensor_log_by_id(sensor_id: i64) -> Result<Sensor, String> {
    let url = sensor_url(sensor_id);
    get_json(&url, |status| {
        format!("Error fetching sensor logs: {} | URL: {}", status, url)
    })
    .await
}

/// Everything the room detail view needs; fails if either request fails
pub async fn fetch_room_details(room_id: i64) -> Result<RoomDetails, String> {
    let (room, room_sensors) = try_join(
        fetch_room_details_by_id(room_id),
        fetch_sensor_data_by_room_id(room_id),
    )
    .await?;
    Ok(RoomDetails { room, room_sensors })
}

/// Per-sensor logs; a failing sensor only drops its own rows
pub async fn fetch_sensor_log_table(sensors: Vec<SensorDescriptor>) -> SensorLogTable {
    let results = join_all(
        sensors
            .iter()
            .map(|sensor| async move { fetch_sensor_log_by_id(sensor.id).await.map(|s| s.values) }),
    )
    .await;
    SensorLogTable::collect(&sensors, results)
}

async fn get_json<T: DeserializeOwned>(
    url: &str,
    describe: impl FnOnce(&str) -> String,
) -> Result<T, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        if !resp.ok() {
            return Err(describe(&resp.status_text()));
        }
        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = describe;
        Err(format!("{}: fetching is only available in the browser build", url))
    }
}
