//! Page frame for the receptionist's building plan

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

#[component]
pub fn ReceptionistLayout(children: Children) -> impl IntoView {
    view! {
        <Title text="My Building Plan" />
        <Meta name="description" content="Interactive building plan" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <BuildingPlan>{children()}</BuildingPlan>
    }
}

/// Page body: the plan heading, then the assignment heading and its content
#[component]
pub fn BuildingPlan(children: Children) -> impl IntoView {
    view! {
        <main class="receptionistLayout">
            <h1>"Building Plan"</h1>
            <h2>"Assign Patient to Room"</h2>
            {children()}
        </main>
    }
}
