//! Main App component

use crate::components::room_info::RoomInfo;
use crate::layouts::receptionist::ReceptionistLayout;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (room_input, set_room_input) = signal(String::new());
    let (selected_room, set_selected_room) = signal(None::<i64>);

    let open_room = move |_| {
        if let Ok(id) = room_input.get().trim().parse::<i64>() {
            set_selected_room.set(Some(id));
        }
    };

    view! {
        <div style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <ReceptionistLayout>
                <div>
                    <input
                        type="number"
                        placeholder="Room id"
                        prop:value=move || room_input.get()
                        on:input=move |ev| set_room_input.set(event_target_value(&ev))
                    />
                    <button on:click=open_room>"Open room"</button>
                </div>
                {move || {
                    selected_room.get().map(|room_id| {
                        view! {
                            <RoomInfo room_id=room_id on_close=move |_: ()| set_selected_room.set(None) />
                        }
                    })
                }}
            </ReceptionistLayout>
        </div>
    }
}
