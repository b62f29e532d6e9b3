//! Tab strip with panels that share the active value through context.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use leptos::prelude::*;

use crate::util::classes;

#[derive(Clone, Copy)]
struct TabsContext {
    active: RwSignal<String>,
}

/// `data-state` value for a trigger.
#[must_use]
pub fn tab_state(active: &str, value: &str) -> &'static str {
    if active == value { "active" } else { "inactive" }
}

/// Reactive `data-state` and active-class readers for one trigger.
fn trigger_bindings(
    active: RwSignal<String>,
    value: String,
) -> (impl Fn() -> &'static str + Clone + 'static, impl Fn() -> bool + Clone + 'static) {
    let state_value = value.clone();
    let state = move || tab_state(&active.get(), &state_value);
    let is_active = move || active.with(|current| *current == value);
    (state, is_active)
}

#[component]
pub fn Tabs(
    #[prop(into)] default_value: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let active = RwSignal::new(default_value);
    provide_context(TabsContext { active });
    view! {
        <div class=classes::join(&["tabs", &class]) data-tabs-value=move || active.get()>
            {children()}
        </div>
    }
}

#[component]
pub fn TabsList(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=classes::join(&["tabs__list", &class]) role="tablist">
            {children()}
        </div>
    }
}

#[component]
pub fn TabsTrigger(#[prop(into)] value: String, children: Children) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    let (state, is_active) = trigger_bindings(ctx.active, value.clone());
    view! {
        <button
            type="button"
            role="tab"
            class="tabs__trigger"
            class:tabs__trigger--active=is_active
            data-state=state
            on:click=move |_| ctx.active.set(value.clone())
        >
            {children()}
        </button>
    }
}

/// Panel rendered only while its `value` is the active tab.
#[component]
pub fn TabsContent(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = expect_context::<TabsContext>();
    let class = classes::join(&["tabs__content", &class]);
    view! {
        <Show when=move || ctx.active.get() == value>
            <div class=class.clone() role="tabpanel">
                {children()}
            </div>
        </Show>
    }
}
