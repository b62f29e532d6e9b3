//! Small inline label.

use leptos::prelude::*;

use crate::util::classes;

#[component]
pub fn Badge(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <span class=classes::join(&["badge", &class])>{children()}</span> }
}
