//! Card container primitives.

use leptos::prelude::*;

use crate::util::classes;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=classes::join(&["card", &class])>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=classes::join(&["card__header", &class])>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=classes::join(&["card__title", &class])>{children()}</h3> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=classes::join(&["card__content", &class])>{children()}</div> }
}
