//! Plain-text rendering of the views for the terminal

use ward_types::{room_error_text, SensorLogTable};

use crate::room_view::{RoomView, RoomViewState, SensorLogVisibility};

/// Render the room detail view in its current state
pub fn render_room_view(view: &RoomView) -> String {
    match view.state() {
        RoomViewState::Loading => "Loading...\n".to_string(),
        RoomViewState::Failed { message } => format!("{}\n", room_error_text(message)),
        RoomViewState::Ready {
            details,
            sensor_log,
        } => {
            let readings: String = details
                .reading_lines()
                .iter()
                .map(|line| format!("{}\n", line))
                .collect();
            let patients: String = details
                .patient_names()
                .iter()
                .map(|name| format!("  - {}\n", name))
                .collect();
            let toggle = match sensor_log {
                SensorLogVisibility::Hidden => "Show Sensor Logs",
                SensorLogVisibility::Shown => "Hide Sensor Logs",
            };

            format!(
                "{name}\nCapacity: {capacity}\nAvailability: {availability}\n{readings}Patients:\n{patients}[{toggle}]\n",
                name = details.room.name,
                capacity = details.room.capacity,
                availability = details.room.availability,
            )
        }
    }
}

/// Render the sensor log table, with the error banner when a fetch failed
pub fn render_sensor_log(table: &SensorLogTable) -> String {
    let banner = table
        .error
        .as_ref()
        .map(|message| format!("Error fetching sensor logs:\n{}\n", message))
        .unwrap_or_default();

    let rows: String = table
        .rows
        .iter()
        .map(|row| {
            format!(
                "{:<14}{:<22}{}\n",
                row.sensor_type, row.timestamp, row.value
            )
        })
        .collect();

    format!(
        "{banner}Sensor Logs:\n{:<14}{:<22}{}\n{rows}",
        "Type", "Timestamp", "Value"
    )
}
