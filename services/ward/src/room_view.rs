//! Room detail view state
//!
//! `Loading` → `Ready` | `Failed`. While `Ready`, the sensor log can be
//! shown or hidden without touching the network.

use futures::future::try_join;
use ward_types::{RoomDetails, SensorDescriptor};

use crate::api_client::WardApi;

/// Whether the detailed sensor log is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorLogVisibility {
    Hidden,
    Shown,
}

impl SensorLogVisibility {
    pub fn toggled(self) -> Self {
        match self {
            SensorLogVisibility::Hidden => SensorLogVisibility::Shown,
            SensorLogVisibility::Shown => SensorLogVisibility::Hidden,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoomViewState {
    Loading,
    Ready {
        details: RoomDetails,
        sensor_log: SensorLogVisibility,
    },
    Failed {
        message: String,
    },
}

/// A room detail view bound to one room id
pub struct RoomView {
    room_id: i64,
    state: RoomViewState,
    on_close: Box<dyn FnMut() + Send>,
}

impl std::fmt::Debug for RoomView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomView")
            .field("room_id", &self.room_id)
            .field("state", &self.state)
            .finish()
    }
}

impl RoomView {
    pub fn new(room_id: i64, on_close: impl FnMut() + Send + 'static) -> Self {
        Self {
            room_id,
            state: RoomViewState::Loading,
            on_close: Box::new(on_close),
        }
    }

    pub fn room_id(&self) -> i64 {
        self.room_id
    }

    pub fn state(&self) -> &RoomViewState {
        &self.state
    }

    /// Fetch the room composition and the room's sensor list concurrently.
    ///
    /// Every call re-issues both requests; nothing is cached.
    pub async fn load(&mut self, api: &dyn WardApi) -> &RoomViewState {
        self.state = RoomViewState::Loading;

        let fetched = try_join(
            api.fetch_room_details_by_id(self.room_id),
            api.fetch_sensor_data_by_room_id(self.room_id),
        )
        .await;

        self.state = match fetched {
            Ok((room, room_sensors)) => {
                tracing::debug!("Room {} loaded: '{}'", self.room_id, room.name);
                RoomViewState::Ready {
                    details: RoomDetails { room, room_sensors },
                    sensor_log: SensorLogVisibility::Hidden,
                }
            }
            Err(e) => {
                tracing::debug!("Room {} failed to load: {}", self.room_id, e);
                RoomViewState::Failed {
                    message: e.to_string(),
                }
            }
        };
        &self.state
    }

    /// Flip sensor log visibility. Returns the new visibility, or `None`
    /// when the view is not ready.
    pub fn toggle_sensor_log(&mut self) -> Option<SensorLogVisibility> {
        match &mut self.state {
            RoomViewState::Ready { sensor_log, .. } => {
                *sensor_log = sensor_log.toggled();
                Some(*sensor_log)
            }
            _ => None,
        }
    }

    /// Invoke the close callback. Only a ready view can be closed.
    pub fn close(&mut self) -> bool {
        if matches!(self.state, RoomViewState::Ready { .. }) {
            (self.on_close)();
            true
        } else {
            false
        }
    }

    pub fn details(&self) -> Option<&RoomDetails> {
        match &self.state {
            RoomViewState::Ready { details, .. } => Some(details),
            _ => None,
        }
    }

    pub fn sensor_log_shown(&self) -> bool {
        matches!(
            self.state,
            RoomViewState::Ready {
                sensor_log: SensorLogVisibility::Shown,
                ..
            }
        )
    }

    /// Sensors to feed the sensor log view
    pub fn sensor_descriptors(&self) -> Vec<SensorDescriptor> {
        self.details()
            .map(RoomDetails::sensor_descriptors)
            .unwrap_or_default()
    }
}
