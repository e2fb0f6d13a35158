//! Sensor log table component

use crate::api::fetch_sensor_log_table;
use leptos::prelude::*;
use ward_types::SensorDescriptor;

/// Fetches every sensor's log and lists the values in one table
#[component]
pub fn SensorInfo(sensors: Vec<SensorDescriptor>) -> impl IntoView {
    let table = LocalResource::new(move || fetch_sensor_log_table(sensors.clone()));

    view! {
        <Suspense fallback=move || view! { <p>"Loading..."</p> }>
            {move || {
                table.get().map(|table| {
                    view! {
                        {table.error.map(|message| view! {
                            <div class="error" style="color: #721c24;">
                                <p>"Error fetching sensor logs:"</p>
                                <p>{message}</p>
                            </div>
                        })}
                        <h3>"Sensor Logs:"</h3>
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr style="border-bottom: 2px solid #dee2e6;">
                                    <th style="padding: 0.5rem; text-align: left;">"Type"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Timestamp"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Value"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {table.rows.into_iter().map(|row| {
                                    view! {
                                        <tr style="border-bottom: 1px solid #dee2e6;">
                                            <td style="padding: 0.5rem;">{row.sensor_type}</td>
                                            <td style="padding: 0.5rem;">{row.timestamp}</td>
                                            <td style="padding: 0.5rem;">{row.value}</td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                })
            }}
        </Suspense>
    }
}
