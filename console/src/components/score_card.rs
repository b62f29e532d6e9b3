//! Campaign score with recommendations and next-step actions.

#[cfg(test)]
#[path = "score_card_test.rs"]
mod score_card_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::progress::Progress;
use crate::net::types::CampaignAnalytics;
use crate::util::format::format_percent;

/// Qualitative grade for a 0..=100 score.
#[must_use]
pub fn score_grade(score: f64) -> &'static str {
    if score >= 80.0 {
        "Strong"
    } else if score >= 60.0 {
        "Fair"
    } else {
        "Needs work"
    }
}

#[component]
pub fn CampaignScoreCard(
    analytics: CampaignAnalytics,
    on_improve: Callback<()>,
    on_finalize: Callback<()>,
) -> impl IntoView {
    let score = analytics.score;
    let recommendations = analytics.recommendations;
    let has_recommendations = !recommendations.is_empty();

    view! {
        <Card class="score-card">
            <CardHeader>
                <CardTitle>"Campaign Score"</CardTitle>
                <Badge>{score_grade(score)}</Badge>
            </CardHeader>
            <CardContent>
                <p class="score-card__score">{format!("{score:.0}")}<span>"/100"</span></p>
                <Progress value=score/>
                <p class="score-card__lift">"Lift: " {format_percent(analytics.lift)}</p>
                <Show when=move || has_recommendations>
                    <h4 class="score-card__subtitle">"Recommendations"</h4>
                </Show>
                <ul class="score-card__recommendations">
                    {recommendations.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
                </ul>
                <div class="score-card__actions">
                    <Button variant=ButtonVariant::Outline on_click=on_improve>
                        "Improve"
                    </Button>
                    <Button on_click=on_finalize>"Finalize"</Button>
                </div>
            </CardContent>
        </Card>
    }
}
