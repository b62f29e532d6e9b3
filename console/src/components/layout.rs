//! Application frame: navigation rail, theme toggle, and the routed page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::NAV_ITEMS;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::print::NO_PRINT_CLASS;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Stored preference wins over the SSR default once hydrated.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let expanded = move || ui.with(|u| u.nav_expanded);
    let toggle_theme = Callback::new(move |()| {
        let next = dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
        ui.update(|u| u.dark_mode = next);
    });
    let toggle_nav = Callback::new(move |()| ui.update(UiState::toggle_nav));

    view! {
        <div class="layout" class:layout--collapsed=move || !expanded()>
            <nav class=format!("layout__nav {NO_PRINT_CLASS}") aria-label="Primary">
                <div class="layout__brand">
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon on_click=toggle_nav title="Toggle navigation">
                        "☰"
                    </Button>
                    <Show when=expanded>
                        <span class="layout__title">"Campaign Console"</span>
                    </Show>
                </div>
                <ul class="layout__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <A href=item.path attr:class="layout__link" attr:title=item.label>
                                        <span class="layout__icon" aria-hidden="true">{item.icon}</span>
                                        <Show when=expanded>
                                            <span class="layout__label">{item.label}</span>
                                        </Show>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="layout__footer">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        on_click=toggle_theme
                        title="Toggle dark mode"
                    >
                        {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                    </Button>
                </div>
            </nav>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
