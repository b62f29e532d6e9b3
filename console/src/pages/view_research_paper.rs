//! Research paper detail view with print-to-PDF export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `?id=` from the current location (falling back to the sample
//! paper) and loads that paper as a single entity. The whole article sits
//! inside the print area; navigation and export controls are excluded from
//! printing.

#[cfg(test)]
#[path = "view_research_paper_test.rs"]
mod view_research_paper_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::artifact_card::ArtifactCard;
use crate::components::badge::Badge;
use crate::components::button::Button;
use crate::components::card::{Card, CardContent};
use crate::components::skeleton::Skeleton;
use crate::net::CampaignApi;
use crate::net::api::SAMPLE_PAPER_ID;
use crate::net::types::{ExperimentConfig, ResearchPaper};
use crate::state::view_state::DetailState;
use crate::util::format::{format_long_date, pretty_json};
use crate::util::markdown::render_markdown_html;
use crate::util::print::{NO_PRINT_CLASS, PRINT_AREA_ID, print_page, print_stylesheet};

const LIBRARY_PATH: &str = "/ResearchPapers";

/// Paper id from the `id` query value; missing or blank means the sample paper.
#[must_use]
pub fn paper_id_from_query(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => SAMPLE_PAPER_ID.to_owned(),
    }
}

/// `By Jane Doe, John Smith on October 16, 2026`.
#[must_use]
pub fn byline(paper: &ResearchPaper) -> String {
    format!("By {} on {}", paper.authors.join(", "), format_long_date(&paper.created_date))
}

#[component]
pub fn ViewResearchPaperPage() -> impl IntoView {
    let api = super::campaign_api();
    let query = use_query_map();
    let state = RwSignal::new(DetailState::<ResearchPaper>::default());

    // Reload whenever the query string changes.
    Effect::new(move || {
        let id = query.with(|q| paper_id_from_query(q.get_str("id")));
        super::spawn_detail(state, "research paper", async move { api.get_paper(&id).await });
    });

    view! {
        <div class="page paper-page">
            {move || match state.get() {
                DetailState::Loading => view! { <PaperSkeleton/> }.into_any(),
                DetailState::Missing | DetailState::Failed(_) => view! { <PaperNotFound/> }.into_any(),
                DetailState::Loaded(paper) => view! { <PaperArticle paper=paper/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PaperSkeleton() -> impl IntoView {
    view! {
        <div class="paper-page__skeleton">
            <Skeleton class="skeleton--title"/>
            <Skeleton class="skeleton--line"/>
            <Skeleton class="skeleton--h24"/>
        </div>
    }
}

#[component]
fn PaperNotFound() -> impl IntoView {
    view! {
        <div class="page__placeholder">
            <h3>"Paper Not Found"</h3>
            <A href=LIBRARY_PATH attr:class="btn btn--link">
                "Back to Library"
            </A>
        </div>
    }
}

#[component]
fn PaperArticle(paper: ResearchPaper) -> impl IntoView {
    let by = byline(&paper);
    let body_html = render_markdown_html(&paper.content);
    let artifacts = paper.reproducibility_artifacts;
    let has_artifacts = !artifacts.is_empty();
    let on_print = Callback::new(|()| print_page());

    view! {
        <style>{print_stylesheet()}</style>
        <div id=PRINT_AREA_ID class="paper">
            <div class=format!("paper__toolbar {NO_PRINT_CLASS}")>
                <A href=LIBRARY_PATH attr:class="btn btn--outline">
                    "← Back to Library"
                </A>
                <Button on_click=on_print>"Export to PDF"</Button>
            </div>

            <header class="paper__header">
                <div class="paper__tags">
                    {paper.tags.into_iter().map(|tag| view! { <Badge class="badge--accent">{tag}</Badge> }).collect_view()}
                </div>
                <h1 class="paper__title">{paper.title}</h1>
                <p class="paper__byline">{by}</p>
            </header>

            <section class="paper__section">
                <h2 class="paper__section-title">"Abstract"</h2>
                <p class="paper__abstract">{paper.abstract_text}</p>
            </section>

            <article class="paper__body markdown" inner_html=body_html></article>

            {paper.experiment_config.map(|config| view! { <ExperimentSection config=config/> })}

            <Show when=move || has_artifacts>
                <section class="paper__section">
                    <h3 class="paper__section-title">"Artifacts"</h3>
                    <div class="paper__artifacts">
                        {artifacts.clone().into_iter().map(|name| view! { <ArtifactCard name=name/> }).collect_view()}
                    </div>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn ExperimentSection(config: ExperimentConfig) -> impl IntoView {
    view! {
        <section class="paper__section">
            <h2 class="paper__section-title">"Reproducible Experiment"</h2>
            <Card class="paper__experiment">
                <CardContent>
                    <div class="paper__experiment-grid">
                        <div>
                            <h4>"Model"</h4>
                            <p>{config.model_name}</p>
                            <h4>"Dataset"</h4>
                            <p>{config.dataset}</p>
                            <h4>"Metrics"</h4>
                            <pre class="paper__json">{pretty_json(&config.metrics)}</pre>
                        </div>
                        <div>
                            <h4>"Hyperparameters"</h4>
                            <pre class="paper__json">{pretty_json(&config.hyperparameters)}</pre>
                        </div>
                    </div>
                </CardContent>
            </Card>
        </section>
    }
}
