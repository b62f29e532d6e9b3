//! Horizontal progress bar.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use leptos::prelude::*;

use crate::util::classes;

/// Clamp to `0..=100`; non-finite input reads as 0.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

#[component]
pub fn Progress(#[prop(into)] value: Signal<f64>, #[prop(optional, into)] class: String) -> impl IntoView {
    let percent = move || clamp_percent(value.get());
    view! {
        <div class=classes::join(&["progress", &class])>
            <div
                class="progress__bar"
                role="progressbar"
                style:width=move || format!("{}%", percent())
                aria-valuenow=move || percent().to_string()
                aria-valuemin="0"
                aria-valuemax="100"
            ></div>
        </div>
    }
}
