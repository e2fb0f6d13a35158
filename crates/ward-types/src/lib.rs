//! Platform-agnostic types for the ward monitoring dashboard.
//!
//! Shared by the native API client (`ward`) and the browser front end
//! (`ward-app`): the records the backend exchanges, availability
//! validation, and the view models both front ends render.

pub mod error;
pub mod types;
pub mod view;

pub use error::{ValidationError, ValidationResult};
pub use types::{
    Availability, Doctor, DoctorUpdate, NewPatient, Patient, Room, Sensor, SensorDescriptor,
    SensorLogEntry,
};
pub use view::{
    format_timestamp, reading_line, room_error_text, KnownSensor, RoomDetails, SensorLogRow,
    SensorLogTable, ROOM_ERROR_BANNER,
};
