//! Dashboard page: campaign inventory with a digest of the selected campaign.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Lists every campaign with portfolio totals; selecting a
//! campaign fetches its variants and analytics as one join and shows a
//! compact digest with a link into the A/B manager.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badge::Badge;
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::info_card::InfoCard;
use crate::components::skeleton::Skeleton;
use crate::net::types::{Campaign, CampaignStatus};
use crate::net::{CampaignApi, FetchError};
use crate::state::view_state::{DependentSource, HasChildren, SelectionState, SupersedePolicy};
use crate::util::format::{format_currency, format_percent};

/// Portfolio-wide numbers shown above the campaign list.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryTotals {
    pub count: usize,
    pub active: usize,
    pub total_budget: f64,
}

#[must_use]
pub fn inventory_totals(campaigns: &[Campaign]) -> InventoryTotals {
    InventoryTotals {
        count: campaigns.len(),
        active: campaigns.iter().filter(|c| c.status == CampaignStatus::Active).count(),
        total_budget: campaigns.iter().map(|c| c.budget).filter(|b| b.is_finite()).sum(),
    }
}

/// Per-campaign summary fetched on selection.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignDigest {
    pub variant_count: usize,
    pub best_ctr: Option<f64>,
    pub score: f64,
}

impl HasChildren for CampaignDigest {
    fn has_children(&self) -> bool {
        self.variant_count > 0
    }
}

/// Campaigns with a variants + analytics digest per selection.
#[derive(Clone, Copy, Debug)]
pub struct DashboardSource<A> {
    api: A,
}

impl<A> DashboardSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl<A: CampaignApi> DependentSource for DashboardSource<A> {
    type Parent = Campaign;
    type Children = CampaignDigest;

    fn label(&self) -> &'static str {
        "campaigns"
    }

    async fn list_parents(&self) -> Result<Vec<Campaign>, FetchError> {
        self.api.list_campaigns().await
    }

    async fn fetch_children(&self, parent_id: &str) -> Result<CampaignDigest, FetchError> {
        let (variants, analytics) =
            futures::try_join!(self.api.list_variants(parent_id), self.api.campaign_analytics(parent_id))?;
        Ok(CampaignDigest {
            variant_count: variants.len(),
            best_ctr: variants.iter().map(|v| v.ctr).reduce(f64::max),
            score: analytics.score,
        })
    }
}

type DashboardState = SelectionState<Campaign, CampaignDigest>;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let source = DashboardSource::new(super::campaign_api());
    let state = RwSignal::new(DashboardState::new(SupersedePolicy::LatestSelection));
    super::spawn_parent_load(source, state);

    let totals = Memo::new(move |_| state.with(|s| inventory_totals(s.parents())));
    let on_pick = move |id: String| super::spawn_selection(source, state, id);

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Campaign Dashboard"</h1>
                    <p class="page__subtitle">"Every campaign at a glance."</p>
                </div>
            </header>

            <Show
                when=move || !state.with(SelectionState::is_loading_parents)
                fallback=|| view! { <Skeleton class="skeleton--h24"/> }
            >
                <div class="dashboard-page__totals">
                    <InfoCard title="Campaigns" value=Signal::derive(move || totals.get().count.to_string())/>
                    <InfoCard title="Active" value=Signal::derive(move || totals.get().active.to_string())/>
                    <InfoCard
                        title="Total Budget"
                        value=Signal::derive(move || format_currency(totals.get().total_budget))
                    />
                </div>

                <div class="dashboard-page__body">
                    <ul class="dashboard-page__list">
                        {move || {
                            let selected = state.with(|s| s.selected_id().map(str::to_owned));
                            state
                                .with(|s| s.parents().to_vec())
                                .into_iter()
                                .map(|c| {
                                    let is_selected = selected.as_deref() == Some(c.id.as_str());
                                    let id = c.id.clone();
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class="dashboard-page__campaign"
                                                class:dashboard-page__campaign--selected=is_selected
                                                on:click=move |_| on_pick(id.clone())
                                            >
                                                <span class="dashboard-page__name">{c.name}</span>
                                                <Badge class=format!("badge--{}", c.status.as_str())>
                                                    {c.status.label()}
                                                </Badge>
                                                <span class="dashboard-page__budget">{format_currency(c.budget)}</span>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>

                    <Card class="dashboard-page__digest">
                        <CardHeader>
                            <CardTitle>
                                {move || {
                                    state
                                        .with(|s| s.selected_parent().map(|c| c.name.clone()))
                                        .unwrap_or_else(|| "No campaign selected".to_owned())
                                }}
                            </CardTitle>
                        </CardHeader>
                        <CardContent>
                            {move || {
                                if state.with(SelectionState::is_loading_children) {
                                    return view! { <Skeleton class="skeleton--h16"/> }.into_any();
                                }
                                match state.with(|s| s.children().cloned()) {
                                    Some(digest) if digest.has_children() => {
                                        view! {
                                            <dl class="dashboard-page__digest-stats">
                                                <dt>"Variants"</dt>
                                                <dd>{digest.variant_count}</dd>
                                                <dt>"Best CTR"</dt>
                                                <dd>{digest.best_ctr.map(format_percent).unwrap_or_default()}</dd>
                                                <dt>"Score"</dt>
                                                <dd>{format!("{:.0}", digest.score)}</dd>
                                            </dl>
                                            <A href="/ABManager" attr:class="btn btn--link">
                                                "Open A/B Manager"
                                            </A>
                                        }
                                            .into_any()
                                    }
                                    _ => view! { <p class="page__empty">"No data for this campaign."</p> }.into_any(),
                                }
                            }}
                        </CardContent>
                    </Card>
                </div>
            </Show>
        </div>
    }
}
