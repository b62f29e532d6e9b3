//! A/B test manager: variant performance and campaign score per campaign.
//!
//! SYSTEM CONTEXT
//! ==============
//! Campaigns are the parent list; variants and analytics for the selected
//! campaign are fetched as one join. A rejected join shows the same empty
//! states as a campaign with no data.

#[cfg(test)]
#[path = "ab_manager_test.rs"]
mod ab_manager_test;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::components::card::{Card, CardContent};
use crate::components::performance_summary::{PerformanceSummary, summarize};
use crate::components::score_card::CampaignScoreCard;
use crate::components::select::{Select, campaign_options};
use crate::components::skeleton::Skeleton;
use crate::components::variant_card::VariantComparisonCard;
use crate::net::types::{Campaign, CampaignAnalytics, Variant};
use crate::net::{CampaignApi, FetchError};
use crate::state::view_state::{DependentSource, HasChildren, SelectionState, SupersedePolicy};

/// Placeholder cards shown while variants load.
const SKELETON_CARDS: usize = 3;

/// Variants plus the analytics record for one campaign.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbData {
    pub variants: Vec<Variant>,
    /// `None` when the analytics record belongs to a different campaign.
    pub analytics: Option<CampaignAnalytics>,
}

impl HasChildren for AbData {
    fn has_children(&self) -> bool {
        !self.variants.is_empty() || self.analytics.is_some()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AbSource<A> {
    api: A,
}

impl<A> AbSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl<A: CampaignApi> DependentSource for AbSource<A> {
    type Parent = Campaign;
    type Children = AbData;

    fn label(&self) -> &'static str {
        "A/B data"
    }

    async fn list_parents(&self) -> Result<Vec<Campaign>, FetchError> {
        self.api.list_campaigns().await
    }

    async fn fetch_children(&self, parent_id: &str) -> Result<AbData, FetchError> {
        let (variants, analytics) =
            futures::try_join!(self.api.list_variants(parent_id), self.api.campaign_analytics(parent_id))?;
        let analytics = (analytics.campaign_id == parent_id).then_some(analytics);
        Ok(AbData { variants, analytics })
    }
}

type AbState = SelectionState<Campaign, AbData>;

#[component]
pub fn AbManagerPage() -> impl IntoView {
    let source = AbSource::new(super::campaign_api());
    let state = RwSignal::new(AbState::new(SupersedePolicy::LatestSelection));
    super::spawn_parent_load(source, state);

    let options = Signal::derive(move || state.with(|s| campaign_options(s.parents())));
    let selected_id = Signal::derive(move || state.with(|s| s.selected_id().map(str::to_owned)));
    let has_selection = move || state.with(|s| s.selected_parent().is_some());
    let on_change = Callback::new(move |id: String| super::spawn_selection(source, state, id));

    let loading = Signal::derive(move || state.with(SelectionState::is_loading_children));
    let variants = Signal::derive(move || state.with(|s| s.children().map(|d| d.variants.clone()).unwrap_or_default()));
    let analytics = move || state.with(|s| s.children().and_then(|d| d.analytics.clone()));
    let leader = Memo::new(move |_| variants.with(|v| summarize(v).map(|s| s.leader_id)));

    let on_improve = Callback::new(|()| log::info!("Improve campaign action"));
    let on_finalize = Callback::new(|()| log::info!("Finalize campaign action"));

    view! {
        <div class="page ab-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"A/B Test Manager"</h1>
                    <p class="page__subtitle">"Compare variant performance and optimize campaigns automatically."</p>
                </div>
                <Show
                    when=move || !state.with(SelectionState::is_loading_parents)
                    fallback=|| view! { <Skeleton class="skeleton--select"/> }
                >
                    <Select
                        value=selected_id
                        options=options
                        placeholder="Select a campaign to analyze..."
                        on_change=on_change
                    />
                </Show>
            </header>

            <Show
                when=has_selection
                fallback=|| {
                    view! {
                        <div class="page__placeholder">
                            <h3>"Select a Campaign"</h3>
                            <p>"Choose a campaign from the dropdown to start your analysis."</p>
                        </div>
                    }
                }
            >
                <div class="ab-page__grid">
                    <aside class="ab-page__score">
                        {move || {
                            if loading.get() {
                                return view! {
                                    <Card>
                                        <CardContent>
                                            <Skeleton class="skeleton--h64"/>
                                        </CardContent>
                                    </Card>
                                }
                                    .into_any();
                            }
                            match analytics() {
                                Some(analytics) => {
                                    view! {
                                        <CampaignScoreCard
                                            analytics=analytics
                                            on_improve=on_improve
                                            on_finalize=on_finalize
                                        />
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <Card class="card--dashed">
                                            <CardContent>
                                                <p class="page__empty">"No analytics available"</p>
                                            </CardContent>
                                        </Card>
                                    }
                                        .into_any()
                                }
                            }
                        }}
                    </aside>
                    <section class="ab-page__variants">
                        <PerformanceSummary variants=variants loading=loading/>
                        <div class="ab-page__cards">
                            {move || {
                                if loading.get() {
                                    return (0..SKELETON_CARDS)
                                        .map(|_| {
                                            view! {
                                                <Card>
                                                    <CardContent>
                                                        <Skeleton class="skeleton--h48"/>
                                                    </CardContent>
                                                </Card>
                                            }
                                        })
                                        .collect_view()
                                        .into_any();
                                }
                                let list = variants.get();
                                if list.is_empty() {
                                    return view! {
                                        <div class="page__placeholder ab-page__none">
                                            <h3>"No Variants Found"</h3>
                                            <p>"This campaign has no copy variants to compare."</p>
                                        </div>
                                    }
                                        .into_any();
                                }
                                let leader = leader.get();
                                list.into_iter()
                                    .map(|variant| {
                                        let is_leader = leader.as_deref() == Some(variant.id.as_str());
                                        view! { <VariantComparisonCard variant=variant leader=is_leader/> }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    </section>
                </div>
            </Show>
        </div>
    }
}
