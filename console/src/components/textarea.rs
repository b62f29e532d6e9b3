//! Multi-line text input.

use leptos::prelude::*;

use crate::util::classes;

/// Controlled textarea: renders `value` and reports every edit via `on_input`.
///
/// When `on_submit` is set, Enter submits and Shift+Enter inserts a newline.
#[component]
pub fn Textarea(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 3)] rows: u32,
    #[prop(optional)] on_submit: Option<Callback<()>>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let Some(on_submit) = on_submit else {
            return;
        };
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <textarea
            class=classes::join(&["textarea", &class])
            placeholder=placeholder
            rows=rows.to_string()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:keydown=on_keydown
        ></textarea>
    }
}
