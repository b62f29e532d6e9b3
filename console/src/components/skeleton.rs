//! Pulsing placeholder shown while data loads.

use leptos::prelude::*;

use crate::util::classes;

/// Loading placeholder; size it with modifier classes such as `skeleton--h48`.
#[component]
pub fn Skeleton(#[prop(optional, into)] class: String) -> impl IntoView {
    view! { <div class=classes::join(&["skeleton", &class]) aria-hidden="true"></div> }
}
