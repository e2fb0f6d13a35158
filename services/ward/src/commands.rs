//! CLI commands and their execution against a [`WardApi`]

use clap::Subcommand;
use ward_types::{room_error_text, DoctorUpdate, NewPatient, ValidationError};

use crate::api_client::WardApi;
use crate::render::{render_room_view, render_sensor_log};
use crate::room_view::{RoomView, RoomViewState};
use crate::sensor_log::load_sensor_log;
use crate::WardError;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a room with its latest sensor readings and patients
    Room {
        id: i64,
        /// Also show the detailed sensor log table
        #[arg(long)]
        sensor_log: bool,
    },
    /// Show the sensor log table for a room's sensors
    SensorLog {
        #[arg(long)]
        room: i64,
    },
    /// Change a room's capacity and availability
    UpdateRoom {
        id: i64,
        #[arg(long)]
        capacity: u32,
        /// "Available" or "Under maintenance"
        #[arg(long)]
        availability: String,
    },
    #[command(subcommand)]
    Doctor(DoctorCommand),
    #[command(subcommand)]
    Patient(PatientCommand),
}

#[derive(Debug, Subcommand)]
pub enum DoctorCommand {
    Get {
        id: i64,
    },
    Delete {
        id: i64,
    },
    /// Update only the fields given
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum PatientCommand {
    Get {
        id: i64,
    },
    Delete {
        id: i64,
    },
    /// Create a patient and place it in a room
    Add {
        #[arg(long)]
        room: i64,
        #[arg(long)]
        name: String,
    },
    /// List the patients of a room
    List {
        #[arg(long)]
        room: i64,
    },
}

/// Run a command and return the text to print.
///
/// A room that fails to load is returned as [`WardError::RoomUnavailable`]
/// holding the view's error text.
pub async fn execute(api: &dyn WardApi, command: Command) -> crate::Result<String> {
    match command {
        Command::Room { id, sensor_log } => {
            let mut view = RoomView::new(id, || {});
            if let RoomViewState::Failed { message } = view.load(api).await {
                return Err(WardError::RoomUnavailable(room_error_text(message)));
            }

            let table = if sensor_log && view.toggle_sensor_log().is_some() {
                Some(load_sensor_log(api, &view.sensor_descriptors()).await)
            } else {
                None
            };

            let mut out = render_room_view(&view);
            if let Some(table) = table {
                out.push_str(&render_sensor_log(&table));
            }
            Ok(out)
        }
        Command::SensorLog { room } => {
            let sensors = api.fetch_sensor_data_by_room_id(room).await?;
            let descriptors: Vec<_> = sensors.iter().map(|s| s.descriptor()).collect();
            let table = load_sensor_log(api, &descriptors).await;
            Ok(render_sensor_log(&table))
        }
        Command::UpdateRoom {
            id,
            capacity,
            availability,
        } => {
            let updated = api.update_room(id, capacity, &availability).await?;
            Ok(match updated {
                Some(room) => format!(
                    "Updated room {}: capacity {}, {}\n",
                    room.name, room.capacity, room.availability
                ),
                None => format!("Updated room {}\n", id),
            })
        }
        Command::Doctor(command) => execute_doctor(api, command).await,
        Command::Patient(command) => execute_patient(api, command).await,
    }
}

async fn execute_doctor(api: &dyn WardApi, command: DoctorCommand) -> crate::Result<String> {
    match command {
        DoctorCommand::Get { id } => {
            let doctor = api.get_doctor_by_id(id).await?;
            Ok(format!(
                "{} (id {})\nPhone: {}\n",
                doctor.name, doctor.id, doctor.phone_number
            ))
        }
        DoctorCommand::Delete { id } => {
            api.delete_doctor_by_id(id).await?;
            Ok(format!("Deleted doctor {}\n", id))
        }
        DoctorCommand::Update {
            id,
            name,
            password,
            phone_number,
        } => {
            let update = DoctorUpdate {
                name,
                password,
                phone_number,
            };
            if update.is_empty() {
                return Err(ValidationError::EmptyUpdate.into());
            }
            let updated = api.update_doctor_info(id, &update).await?;
            Ok(match updated {
                Some(doctor) => format!("Updated doctor {}\n", doctor.name),
                None => format!("Updated doctor {}\n", id),
            })
        }
    }
}

async fn execute_patient(api: &dyn WardApi, command: PatientCommand) -> crate::Result<String> {
    match command {
        PatientCommand::Get { id } => {
            let patient = api.get_patient_by_id(id).await?;
            Ok(format!("{} (id {})\n", patient.name, patient.id))
        }
        PatientCommand::Delete { id } => {
            api.delete_patient_by_id(id).await?;
            Ok(format!("Deleted patient {}\n", id))
        }
        PatientCommand::Add { room, name } => {
            let patient = api
                .create_and_add_patient_to_room(&NewPatient { name }, room)
                .await?;
            Ok(format!(
                "Added patient {} (id {}) to room {}\n",
                patient.name, patient.id, room
            ))
        }
        PatientCommand::List { room } => {
            let patients = api.fetch_patients_by_room_id(room).await?;
            Ok(patients
                .iter()
                .map(|p| format!("{}\t{}\n", p.id, p.name))
                .collect())
        }
    }
}
