//! Research paper library.

#[cfg(test)]
#[path = "research_papers_test.rs"]
mod research_papers_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badge::Badge;
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::skeleton::Skeleton;
use crate::net::CampaignApi;
use crate::net::types::ResearchPaper;
use crate::state::view_state::DetailState;
use crate::util::format::format_long_date;

/// Characters of abstract shown on a library card.
const PREVIEW_CHARS: usize = 160;

/// Link to the detail view for `id`.
#[must_use]
pub fn paper_href(id: &str) -> String {
    format!("/ViewResearchPaper?id={}", urlencoding::encode(id))
}

/// Abstract cut at a word boundary with an ellipsis when longer than `max_chars`.
#[must_use]
pub fn abstract_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}

#[component]
pub fn ResearchPapersPage() -> impl IntoView {
    let api = super::campaign_api();
    let state = RwSignal::new(DetailState::<Vec<ResearchPaper>>::default());
    super::spawn_detail(state, "research papers", async move { api.list_papers().await });

    view! {
        <div class="page papers-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Research Library"</h1>
                    <p class="page__subtitle">"Published findings from campaign experiments."</p>
                </div>
            </header>
            {move || match state.get() {
                DetailState::Loading => {
                    view! {
                        <div class="papers-page__grid">
                            <Skeleton class="skeleton--h48"/>
                            <Skeleton class="skeleton--h48"/>
                        </div>
                    }
                        .into_any()
                }
                DetailState::Loaded(papers) if !papers.is_empty() => {
                    view! {
                        <div class="papers-page__grid">
                            {papers
                                .into_iter()
                                .map(|paper| {
                                    view! {
                                        <Card class="paper-card">
                                            <CardHeader>
                                                <CardTitle>
                                                    <A href=paper_href(&paper.id)>{paper.title}</A>
                                                </CardTitle>
                                            </CardHeader>
                                            <CardContent>
                                                <p class="paper-card__meta">
                                                    {paper.authors.join(", ")}
                                                    " · "
                                                    {format_long_date(&paper.created_date)}
                                                </p>
                                                <p class="paper-card__abstract">
                                                    {abstract_preview(&paper.abstract_text, PREVIEW_CHARS)}
                                                </p>
                                                <div class="paper-card__tags">
                                                    {paper
                                                        .tags
                                                        .into_iter()
                                                        .map(|tag| view! { <Badge>{tag}</Badge> })
                                                        .collect_view()}
                                                </div>
                                            </CardContent>
                                        </Card>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                DetailState::Loaded(_) | DetailState::Missing | DetailState::Failed(_) => {
                    view! {
                        <div class="page__placeholder">
                            <h3>"No Papers Yet"</h3>
                            <p>"Published research will appear here."</p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
