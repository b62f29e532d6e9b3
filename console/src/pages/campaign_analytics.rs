//! Campaign analytics center: AI judge verdicts and human surveys.
//!
//! SYSTEM CONTEXT
//! ==============
//! Campaigns are the parent list; judgements and surveys for the selected
//! campaign are fetched together. Analyses and surveys created on this page
//! are appended to the local collections without a refetch.

#[cfg(test)]
#[path = "campaign_analytics_test.rs"]
mod campaign_analytics_test;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::components::info_card::InfoCard;
use crate::components::judge_bot::JudgeBotAnalyzer;
use crate::components::select::{Select, campaign_options};
use crate::components::skeleton::Skeleton;
use crate::components::survey_manager::SurveyManager;
use crate::components::tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
use crate::net::types::{Campaign, Judgement, Survey};
use crate::net::{CampaignApi, FetchError};
use crate::state::view_state::{DependentSource, HasChildren, SelectionState, SupersedePolicy};
use crate::util::format::{capitalize, format_currency};

/// Judgements and surveys for one campaign.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyticsData {
    pub judgements: Vec<Judgement>,
    pub surveys: Vec<Survey>,
}

impl HasChildren for AnalyticsData {
    fn has_children(&self) -> bool {
        !self.judgements.is_empty() || !self.surveys.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnalyticsSource<A> {
    api: A,
}

impl<A> AnalyticsSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl<A: CampaignApi> DependentSource for AnalyticsSource<A> {
    type Parent = Campaign;
    type Children = AnalyticsData;

    fn label(&self) -> &'static str {
        "campaign analytics"
    }

    async fn list_parents(&self) -> Result<Vec<Campaign>, FetchError> {
        self.api.list_campaigns().await
    }

    async fn fetch_children(&self, parent_id: &str) -> Result<AnalyticsData, FetchError> {
        let (judgements, surveys) =
            futures::try_join!(self.api.list_judgements(parent_id), self.api.list_surveys(parent_id))?;
        Ok(AnalyticsData { judgements, surveys })
    }
}

/// Overview rows: name, capitalized status, budget, and audience (`N/A` when absent).
#[must_use]
pub fn overview_fields(campaign: &Campaign) -> [(&'static str, String); 4] {
    let budget = if campaign.budget.is_finite() { campaign.budget } else { 0.0 };
    [
        ("Campaign Name", campaign.name.clone()),
        ("Status", capitalize(campaign.status.as_str())),
        ("Budget", format_currency(budget)),
        (
            "Target Audience",
            campaign.target_audience.clone().filter(|a| !a.is_empty()).unwrap_or_else(|| "N/A".to_owned()),
        ),
    ]
}

type AnalyticsState = SelectionState<Campaign, AnalyticsData>;

/// Append a locally produced judgement to the current selection's data.
pub fn append_judgement(state: &mut AnalyticsState, judgement: Judgement) {
    match state.children_mut() {
        Some(data) => data.judgements.push(judgement),
        None => log::warn!("judgement for '{}' arrived with no loaded campaign data", judgement.campaign_id),
    }
}

/// Append a locally created survey to the current selection's data.
pub fn append_survey(state: &mut AnalyticsState, survey: Survey) {
    match state.children_mut() {
        Some(data) => data.surveys.push(survey),
        None => log::warn!("survey for '{}' arrived with no loaded campaign data", survey.campaign_id),
    }
}

#[component]
pub fn CampaignAnalyticsPage() -> impl IntoView {
    let source = AnalyticsSource::new(super::campaign_api());
    let state = RwSignal::new(AnalyticsState::new(SupersedePolicy::LatestSelection));
    super::spawn_parent_load(source, state);

    let selected = Memo::new(move |_| state.with(|s| s.selected_parent().cloned()));
    let options = Signal::derive(move || state.with(|s| campaign_options(s.parents())));
    let selected_id = Signal::derive(move || state.with(|s| s.selected_id().map(str::to_owned)));
    let on_change = Callback::new(move |id: String| super::spawn_selection(source, state, id));

    let judgements = Signal::derive(move || {
        state.with(|s| s.children().map(|d| d.judgements.clone()).unwrap_or_default())
    });
    let surveys =
        Signal::derive(move || state.with(|s| s.children().map(|d| d.surveys.clone()).unwrap_or_default()));
    let on_analysis = Callback::new(move |j: Judgement| state.update(|s| append_judgement(s, j)));
    let on_survey = Callback::new(move |survey: Survey| state.update(|s| append_survey(s, survey)));
    let loading_data = move || state.with(SelectionState::is_loading_children);

    view! {
        <div class="page analytics-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Campaign Analytics Center"</h1>
                    <p class="page__subtitle">"Get feedback from AI Judge Bot and human surveys."</p>
                </div>
                <Show
                    when=move || !state.with(SelectionState::is_loading_parents)
                    fallback=|| view! { <Skeleton class="skeleton--select"/> }
                >
                    <Select
                        value=selected_id
                        options=options
                        placeholder="Select a campaign..."
                        on_change=on_change
                    />
                </Show>
            </header>

            {move || match selected.get() {
                None => {
                    view! {
                        <div class="page__placeholder">
                            <h3>"Select a Campaign"</h3>
                            <p>"Choose a campaign to view its analytics."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(campaign) => {
                    let judge_campaign = campaign.clone();
                    let survey_campaign = campaign.clone();
                    view! {
                        <div class="analytics-page__grid">
                            <aside class="analytics-page__overview">
                                <h3 class="page__section-title">"Campaign Overview"</h3>
                                {overview_fields(&campaign)
                                    .into_iter()
                                    .map(|(title, value)| view! { <InfoCard title=title value=value/> })
                                    .collect_view()}
                            </aside>
                            <section class="analytics-page__main">
                                <Tabs default_value="judge-bot">
                                    <TabsList>
                                        <TabsTrigger value="judge-bot">"AI Judge Bot"</TabsTrigger>
                                        <TabsTrigger value="human-survey">"Human Surveys"</TabsTrigger>
                                    </TabsList>
                                    <TabsContent value="judge-bot">
                                        {
                                            let campaign = judge_campaign.clone();
                                            move || {
                                                if loading_data() {
                                                    view! { <Skeleton class="skeleton--panel"/> }.into_any()
                                                } else {
                                                    view! {
                                                        <JudgeBotAnalyzer
                                                            campaign=campaign.clone()
                                                            judgements=judgements
                                                            on_analysis_complete=on_analysis
                                                        />
                                                    }
                                                        .into_any()
                                                }
                                            }
                                        }
                                    </TabsContent>
                                    <TabsContent value="human-survey">
                                        {
                                            let campaign = survey_campaign.clone();
                                            move || {
                                                if loading_data() {
                                                    view! { <Skeleton class="skeleton--panel"/> }.into_any()
                                                } else {
                                                    view! {
                                                        <SurveyManager
                                                            campaign=campaign.clone()
                                                            surveys=surveys
                                                            on_survey_created=on_survey
                                                        />
                                                    }
                                                        .into_any()
                                                }
                                            }
                                        }
                                    </TabsContent>
                                </Tabs>
                            </section>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
