//! AI judge panel: shows the latest bot verdict and runs a local analysis.
//!
//! The analysis is a deterministic heuristic over the campaign record; no
//! model is called. Results are reported upward so the page can append them
//! to its judgement list without refetching.

#[cfg(test)]
#[path = "judge_bot_test.rs"]
mod judge_bot_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::progress::Progress;
use crate::net::types::{Campaign, CampaignStatus, JudgeKind, Judgement};

const BASE_SCORE: f64 = 55.0;
const AUDIENCE_BONUS: f64 = 15.0;
const MAX_BUDGET_BONUS: f64 = 15.0;
/// Budget worth one bonus point.
const BUDGET_PER_POINT: f64 = 2_000.0;
const LOW_BUDGET: f64 = 20_000.0;

/// Most recent `ai_bot` judgement, if any.
#[must_use]
pub fn latest_bot_judgement(judgements: &[Judgement]) -> Option<&Judgement> {
    judgements.iter().rev().find(|j| j.judge == JudgeKind::AiBot)
}

fn status_bonus(status: CampaignStatus) -> f64 {
    match status {
        CampaignStatus::Active => 15.0,
        CampaignStatus::Completed => 10.0,
        CampaignStatus::Paused => 5.0,
        CampaignStatus::Draft => 0.0,
    }
}

/// Score a campaign and suggest next steps.
#[must_use]
pub fn analyze(campaign: &Campaign) -> Judgement {
    let has_audience = campaign.target_audience.as_deref().is_some_and(|a| !a.trim().is_empty());
    let budget = if campaign.budget.is_finite() { campaign.budget.max(0.0) } else { 0.0 };

    let mut score = BASE_SCORE + status_bonus(campaign.status);
    if has_audience {
        score += AUDIENCE_BONUS;
    }
    score += (budget / BUDGET_PER_POINT).min(MAX_BUDGET_BONUS);
    let score = score.clamp(0.0, 100.0).round();

    let mut recommendations = Vec::new();
    if !has_audience {
        recommendations.push("Define a target audience".to_owned());
    }
    if campaign.status == CampaignStatus::Draft {
        recommendations.push("Launch the campaign to start collecting data".to_owned());
    }
    if budget < LOW_BUDGET {
        recommendations.push("Increase budget to widen reach".to_owned());
    }
    if recommendations.is_empty() {
        recommendations.push("Run a new A/B test on the headline".to_owned());
    }

    Judgement {
        id: uuid::Uuid::new_v4().to_string(),
        campaign_id: campaign.id.clone(),
        judge: JudgeKind::AiBot,
        score,
        recommendations,
    }
}

#[component]
pub fn JudgeBotAnalyzer(
    campaign: Campaign,
    #[prop(into)] judgements: Signal<Vec<Judgement>>,
    on_analysis_complete: Callback<Judgement>,
) -> impl IntoView {
    let latest = Memo::new(move |_| judgements.with(|all| latest_bot_judgement(all).cloned()));
    let campaign_name = campaign.name.clone();
    let run = Callback::new(move |()| {
        let judgement = analyze(&campaign);
        log::info!("judge bot scored '{}' at {}", judgement.campaign_id, judgement.score);
        on_analysis_complete.run(judgement);
    });

    view! {
        <Card class="judge-bot">
            <CardHeader>
                <CardTitle>"AI Judge Bot"</CardTitle>
                <Button on_click=run>"Run Analysis"</Button>
            </CardHeader>
            <CardContent>
                {move || match latest.get() {
                    Some(j) => {
                        view! {
                            <div class="judge-bot__verdict">
                                <p class="judge-bot__score">{format!("{:.0}", j.score)}<span>"/100"</span></p>
                                <Progress value=j.score/>
                                <ul class="judge-bot__recommendations">
                                    {j
                                        .recommendations
                                        .into_iter()
                                        .map(|r| view! { <li>{r}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        let name = campaign_name.clone();
                        view! {
                            <p class="judge-bot__empty">
                                "No AI judgement for " {name} " yet. Run an analysis to get one."
                            </p>
                        }
                            .into_any()
                    }
                }}
            </CardContent>
        </Card>
    }
}
