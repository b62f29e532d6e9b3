//! Downloadable reproducibility artifact tile.

#[cfg(test)]
#[path = "artifact_card_test.rs"]
mod artifact_card_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::util::format::capitalize;
use crate::util::print::NO_PRINT_CLASS;

/// Display title for an artifact key (`"hyper_params"` -> `"Hyper params"`).
#[must_use]
pub fn artifact_title(name: &str) -> String {
    capitalize(&name.replace('_', " "))
}

/// One-line description for known artifact kinds.
#[must_use]
pub fn artifact_description(name: &str) -> String {
    match name {
        "dataset" => "Download sample data".to_owned(),
        "hyperparameters" => "hyperparams.json".to_owned(),
        other => format!("{other} export"),
    }
}

#[component]
pub fn ArtifactCard(#[prop(into)] name: String) -> impl IntoView {
    let title = artifact_title(&name);
    let description = artifact_description(&name);
    let export = Callback::new(move |()| log::info!("export artifact '{name}'"));
    view! {
        <div class="artifact-card">
            <div class="artifact-card__text">
                <p class="artifact-card__title">{title}</p>
                <p class="artifact-card__description">{description}</p>
            </div>
            <Button variant=ButtonVariant::Ghost class=NO_PRINT_CLASS on_click=export>
                "Export"
            </Button>
        </div>
    }
}
