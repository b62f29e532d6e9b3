//! Labelled value tile for overview panels.

use leptos::prelude::*;

use crate::components::badge::Badge;

#[component]
pub fn InfoCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] badge: Option<String>,
) -> impl IntoView {
    view! {
        <div class="info-card">
            <p class="info-card__title">{title}</p>
            <p class="info-card__value">{move || value.get()}</p>
            {badge.map(|text| view! { <Badge class="info-card__badge">{text}</Badge> })}
        </div>
    }
}
