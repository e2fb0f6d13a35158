//! View models shared by the CLI renderer and the browser components.

use core::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Room, Sensor, SensorDescriptor, SensorLogEntry};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Heading of the room view's error state
pub const ROOM_ERROR_BANNER: &str = "Error fetching room data:";

/// Sensor types the room summary knows how to label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownSensor {
    Temperature,
    Humidity,
    Co2,
}

impl KnownSensor {
    pub fn from_type(sensor_type: &str) -> Option<Self> {
        match sensor_type {
            "Temperature" => Some(KnownSensor::Temperature),
            "Humidity" => Some(KnownSensor::Humidity),
            "CO2" => Some(KnownSensor::Co2),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KnownSensor::Temperature => "Temperature",
            KnownSensor::Humidity => "Humidity",
            KnownSensor::Co2 => "CO2",
        }
    }

    /// Unit suffix, including the separating space where one is written
    pub fn unit(&self) -> &'static str {
        match self {
            KnownSensor::Temperature => "°C",
            KnownSensor::Humidity => "%",
            KnownSensor::Co2 => " ppm",
        }
    }
}

/// Summary line for a sensor, e.g. `Temperature: 25°C`.
///
/// Returns `None` for sensor types without a known unit.
pub fn reading_line(sensor: &Sensor) -> Option<String> {
    let kind = KnownSensor::from_type(&sensor.sensor_type)?;
    let line = match sensor.latest() {
        Some(entry) => format!("{}: {}{}", kind.label(), entry.value, kind.unit()),
        None => format!("{}: no readings", kind.label()),
    };
    Some(line)
}

/// Formats a backend timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Zone-less timestamps are taken as-is; anything unparseable is returned
/// verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc).format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

/// Error text for a room that failed to load. The banner is left out when
/// the message already starts with it.
pub fn room_error_text(message: &str) -> String {
    if message.starts_with(ROOM_ERROR_BANNER) {
        message.to_string()
    } else {
        format!("{}\n{}", ROOM_ERROR_BANNER, message)
    }
}

/// Composite model behind the room detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetails {
    /// Room record with each sensor carrying its own history
    pub room: Room,
    /// Sensor records listed for the room by the sensors endpoint
    pub room_sensors: Vec<Sensor>,
}

impl RoomDetails {
    pub fn reading_lines(&self) -> Vec<String> {
        self.room.sensors.iter().filter_map(reading_line).collect()
    }

    pub fn patient_names(&self) -> Vec<&str> {
        self.room.patients.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn sensor_descriptors(&self) -> Vec<SensorDescriptor> {
        self.room.sensors.iter().map(Sensor::descriptor).collect()
    }
}

/// One row of the sensor log table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorLogRow {
    pub sensor_type: String,
    pub timestamp: String,
    pub value: f64,
}

/// Rows for every sensor with a non-empty log, plus the first fetch error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorLogTable {
    pub rows: Vec<SensorLogRow>,
    pub error: Option<String>,
}

impl SensorLogTable {
    /// Builds the table from per-sensor fetch outcomes.
    ///
    /// `results` is positional: the n-th result belongs to the n-th sensor.
    /// Failed, empty and missing histories contribute no rows; only the
    /// first failure's message is kept.
    pub fn collect<E, I>(sensors: &[SensorDescriptor], results: I) -> Self
    where
        E: fmt::Display,
        I: IntoIterator<Item = Result<Option<Vec<SensorLogEntry>>, E>>,
    {
        let mut table = SensorLogTable::default();

        for (sensor, result) in sensors.iter().zip(results) {
            match result {
                Ok(Some(entries)) => {
                    table
                        .rows
                        .extend(entries.into_iter().map(|entry| SensorLogRow {
                            sensor_type: sensor.sensor_type.clone(),
                            timestamp: format_timestamp(&entry.time_stamp),
                            value: entry.value,
                        }));
                }
                Ok(None) => {}
                Err(e) => {
                    if table.error.is_none() {
                        table.error = Some(e.to_string());
                    }
                }
            }
        }

        table
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
