//! Room detail panel

use crate::api::fetch_room_details;
use crate::components::sensor_info::SensorInfo;
use leptos::prelude::*;
use ward_types::room_error_text;

/// Loads a room with its readings and patients. The sensor log below it is
/// shown and hidden locally without refetching.
#[component]
pub fn RoomInfo(room_id: i64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let details = LocalResource::new(move || fetch_room_details(room_id));
    let (sensor_log_shown, set_sensor_log_shown) = signal(false);

    view! {
        <section class="roomInfo">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    details.get().map(|result| match result {
                        Err(message) => view! {
                            <div class="error" style="color: #721c24;">
                                <p style="white-space: pre-line;">{room_error_text(&message)}</p>
                            </div>
                        }.into_any(),
                        Ok(details) => {
                            let sensors = details.sensor_descriptors();
                            let readings = details.reading_lines();
                            let patients: Vec<String> = details
                                .patient_names()
                                .into_iter()
                                .map(str::to_string)
                                .collect();
                            view! {
                                <div>
                                    <button class="closeButton" on:click=move |_| on_close.run(())>
                                        "Close"
                                    </button>
                                    <h2>{details.room.name.clone()}</h2>
                                    <p>{format!("Capacity: {}", details.room.capacity)}</p>
                                    <p>{format!("Availability: {}", details.room.availability)}</p>
                                    <ul class="sensorReadings">
                                        {readings.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}
                                    </ul>
                                    <h3>"Patients:"</h3>
                                    <ul class="patients">
                                        {patients.into_iter().map(|name| view! { <li>{name}</li> }).collect::<Vec<_>>()}
                                    </ul>
                                    <button
                                        class="toggleSensorLogButton"
                                        on:click=move |_| set_sensor_log_shown.update(|shown| *shown = !*shown)
                                    >
                                        {move || if sensor_log_shown.get() { "Hide Sensor Logs" } else { "Show Sensor Logs" }}
                                    </button>
                                    <Show when=move || sensor_log_shown.get()>
                                        <div class="sensorInfo">
                                            <SensorInfo sensors=sensors.clone() />
                                        </div>
                                    </Show>
                                </div>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
