//! Core records exchanged with the ward backend.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Availability of a room.
///
/// The backend accepts exactly two literal values; anything else is
/// rejected locally before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Under maintenance")]
    UnderMaintenance,
}

impl Availability {
    /// Every accepted value, in the order the backend documents them.
    pub const ALL: [Availability; 2] = [Availability::Available, Availability::UnderMaintenance];

    /// The literal sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::UnderMaintenance => "Under maintenance",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Availability::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidAvailability(s.to_string()))
    }
}

/// A single recorded sensor value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorLogEntry {
    /// Empty when the backend omitted it
    #[serde(default)]
    pub time_stamp: String,
    pub value: f64,
}

/// A sensor and, when known, its recorded values.
///
/// `values` is `None` when the backend sent `null` or omitted the field,
/// which is distinct from an empty history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sensor {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub sensor_type: String,
    #[serde(default)]
    pub values: Option<Vec<SensorLogEntry>>,
}

impl Sensor {
    /// Recorded values, treating a missing history as empty
    pub fn readings(&self) -> &[SensorLogEntry] {
        self.values.as_deref().unwrap_or(&[])
    }

    /// The most recent reading; values arrive in time order
    pub fn latest(&self) -> Option<&SensorLogEntry> {
        self.readings().last()
    }

    pub fn descriptor(&self) -> SensorDescriptor {
        SensorDescriptor {
            id: self.id,
            sensor_type: self.sensor_type.clone(),
        }
    }
}

/// Identifies a sensor whose log should be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDescriptor {
    pub id: i64,
    #[serde(rename = "type")]
    pub sensor_type: String,
}

/// A patient placed in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// Payload for creating a patient and attaching it to a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
}

/// A monitored room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    pub availability: Availability,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
    #[serde(default)]
    pub patients: Vec<Patient>,
}

/// A doctor account
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone_number: String,
}

impl fmt::Debug for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Doctor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}

/// Partial update of a doctor; only fields that are set are sent
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DoctorUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
}

impl DoctorUpdate {
    /// Query parameters for the fields that are set, in wire naming
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("password", self.password.as_deref()),
            ("phoneNumber", self.phone_number.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none() && self.phone_number.is_none()
    }
}

impl fmt::Debug for DoctorUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoctorUpdate")
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("phone_number", &self.phone_number)
            .finish()
    }
}
