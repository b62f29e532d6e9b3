//! Button primitive with visual variants and sizes.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use crate::util::classes;

/// Visual treatment of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
    Link,
}

/// Footprint of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Icon,
}

/// Full class list for a button.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Solid => "btn--primary",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Ghost => "btn--ghost",
        ButtonVariant::Link => "btn--link",
    };
    let size = match size {
        ButtonSize::Md => "",
        ButtonSize::Icon => "btn--icon",
    };
    classes::join(&["btn", variant, size, extra])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    /// Renders `type="submit"` instead of `type="button"`.
    #[prop(optional)]
    submit: bool,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let kind = if submit { "submit" } else { "button" };
    view! {
        <button
            type=kind
            class=button_class(variant, size, &class)
            title=title
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
