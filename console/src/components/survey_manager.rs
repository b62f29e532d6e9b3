//! Human survey list with a local create form.

#[cfg(test)]
#[path = "survey_manager_test.rs"]
mod survey_manager_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::textarea::Textarea;
use crate::net::types::{Campaign, Survey};

/// Build a new, unanswered survey. Blank questions are refused.
#[must_use]
pub fn new_survey(campaign_id: &str, question: &str) -> Option<Survey> {
    let question = question.trim();
    if question.is_empty() {
        return None;
    }
    Some(Survey {
        id: uuid::Uuid::new_v4().to_string(),
        campaign_id: campaign_id.to_owned(),
        respondents: 0,
        question: Some(question.to_owned()),
    })
}

#[must_use]
pub fn total_respondents(surveys: &[Survey]) -> u32 {
    surveys.iter().map(|s| s.respondents).sum()
}

#[component]
pub fn SurveyManager(
    campaign: Campaign,
    #[prop(into)] surveys: Signal<Vec<Survey>>,
    on_survey_created: Callback<Survey>,
) -> impl IntoView {
    let question = RwSignal::new(String::new());
    let campaign_id = campaign.id;
    let create = Callback::new(move |()| {
        let Some(survey) = new_survey(&campaign_id, &question.get_untracked()) else {
            return;
        };
        log::info!("created survey {} for '{}'", survey.id, survey.campaign_id);
        question.set(String::new());
        on_survey_created.run(survey);
    });
    let can_create = Signal::derive(move || question.with(|q| !q.trim().is_empty()));

    view! {
        <Card class="survey-manager">
            <CardHeader>
                <CardTitle>"Human Surveys"</CardTitle>
                <span class="survey-manager__total">
                    {move || surveys.with(|s| total_respondents(s))} " respondents"
                </span>
            </CardHeader>
            <CardContent>
                <Show
                    when=move || surveys.with(|s| !s.is_empty())
                    fallback=|| view! { <p class="survey-manager__empty">"No surveys yet."</p> }
                >
                    <ul class="survey-manager__list">
                        {move || {
                            surveys
                                .get()
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <li class="survey-manager__item">
                                            <span>{s.question.unwrap_or_else(|| "Untitled survey".to_owned())}</span>
                                            <span class="survey-manager__count">{s.respondents} " responses"</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
                <div class="survey-manager__form">
                    <Textarea
                        value=question
                        on_input=Callback::new(move |v| question.set(v))
                        placeholder="What should respondents answer?"
                        rows=2
                    />
                    <Button disabled=Signal::derive(move || !can_create.get()) on_click=create>
                        "Create Survey"
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}
