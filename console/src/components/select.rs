//! Native `<select>` with a disabled placeholder option.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::util::classes;

/// One entry in a [`Select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Options for a campaign picker, in list order.
#[must_use]
pub fn campaign_options(campaigns: &[Campaign]) -> Vec<SelectOption> {
    campaigns
        .iter()
        .map(|c| SelectOption::new(c.id.clone(), c.name.clone()))
        .collect()
}

/// Controlled select; `on_change` receives the chosen option value.
#[component]
pub fn Select(
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] placeholder: String,
    on_change: Callback<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <select
            class=classes::join(&["select", &class])
            prop:value=move || value.get().unwrap_or_default()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" disabled=true selected=move || value.get().is_none()>
                {placeholder}
            </option>
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|opt| {
                        let selected = current.as_deref() == Some(opt.value.as_str());
                        view! {
                            <option value=opt.value selected=selected>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
