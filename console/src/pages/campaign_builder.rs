//! Campaign builder: a local draft form with validation and live preview.
//!
//! Drafts never leave the page. Saving validates the form and appends the
//! resulting campaign to a session-local list shown under the preview.

#[cfg(test)]
#[path = "campaign_builder_test.rs"]
mod campaign_builder_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::button::Button;
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::info_card::InfoCard;
use crate::components::select::{Select, SelectOption};
use crate::net::types::{Campaign, CampaignStatus};
use crate::util::format::format_currency;

/// Why a draft could not be saved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("campaign name is required")]
    BlankName,
    #[error("budget '{0}' is not a number")]
    InvalidBudget(String),
    #[error("budget cannot be negative")]
    NegativeBudget,
}

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub status: CampaignStatus,
    pub budget: String,
    pub target_audience: String,
}

impl CampaignDraft {
    /// Parsed budget; blank means zero.
    pub fn budget_value(&self) -> Result<f64, DraftError> {
        let raw = self.budget.trim().replace(',', "");
        let raw = raw.strip_prefix('$').unwrap_or(&raw);
        if raw.is_empty() {
            return Ok(0.0);
        }
        let value: f64 = raw.parse().map_err(|_| DraftError::InvalidBudget(self.budget.clone()))?;
        if !value.is_finite() {
            return Err(DraftError::InvalidBudget(self.budget.clone()));
        }
        if value < 0.0 {
            return Err(DraftError::NegativeBudget);
        }
        Ok(value)
    }

    /// Validate and convert into a campaign with a fresh id.
    pub fn validate(&self) -> Result<Campaign, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::BlankName);
        }
        let budget = self.budget_value()?;
        let audience = self.target_audience.trim();
        Ok(Campaign {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            status: self.status,
            budget,
            target_audience: (!audience.is_empty()).then(|| audience.to_owned()),
        })
    }
}

/// Page-owned builder state.
#[derive(Clone, Debug, Default)]
pub struct BuilderState {
    pub draft: CampaignDraft,
    pub saved: Vec<Campaign>,
    pub error: Option<DraftError>,
}

impl BuilderState {
    /// Save the draft if valid; the form resets on success.
    pub fn submit(&mut self) -> Option<&Campaign> {
        match self.draft.validate() {
            Ok(campaign) => {
                log::info!("saved draft campaign '{}'", campaign.name);
                self.draft = CampaignDraft::default();
                self.error = None;
                self.saved.push(campaign);
                self.saved.last()
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

fn status_options() -> Vec<SelectOption> {
    CampaignStatus::ALL.iter().map(|s| SelectOption::new(s.as_str(), s.label())).collect()
}

#[component]
pub fn CampaignBuilderPage() -> impl IntoView {
    let state = RwSignal::new(BuilderState::default());
    let draft = move || state.with(|s| s.draft.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            s.submit();
        });
    };
    let on_status = Callback::new(move |raw: String| {
        if let Some(status) = CampaignStatus::parse(&raw) {
            state.update(|s| s.draft.status = status);
        }
    });

    let preview_budget = move || match draft().budget_value() {
        Ok(value) => format_currency(value),
        Err(err) => err.to_string(),
    };

    view! {
        <div class="page builder-page">
            <header class="page__header">
                <div>
                    <h1 class="page__title">"Campaign Builder"</h1>
                    <p class="page__subtitle">"Draft a campaign and preview it before launch."</p>
                </div>
            </header>

            <div class="builder-page__grid">
                <Card>
                    <CardHeader>
                        <CardTitle>"Details"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <form class="builder-page__form" on:submit=on_submit>
                            <label class="field">
                                <span class="field__label">"Name"</span>
                                <input
                                    class="input"
                                    type="text"
                                    prop:value=move || draft().name
                                    on:input=move |ev| state.update(|s| s.draft.name = event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"Status"</span>
                                <Select
                                    value=Signal::derive(move || Some(draft().status.as_str().to_owned()))
                                    options=status_options()
                                    placeholder="Choose a status..."
                                    on_change=on_status
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"Budget"</span>
                                <input
                                    class="input"
                                    type="text"
                                    inputmode="decimal"
                                    prop:value=move || draft().budget
                                    on:input=move |ev| state.update(|s| s.draft.budget = event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"Target Audience"</span>
                                <input
                                    class="input"
                                    type="text"
                                    prop:value=move || draft().target_audience
                                    on:input=move |ev| {
                                        state.update(|s| s.draft.target_audience = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <Show when=move || state.with(|s| s.error.is_some())>
                                <p class="field__error" role="alert">
                                    {move || state.with(|s| s.error.as_ref().map(ToString::to_string))}
                                </p>
                            </Show>
                            <Button submit=true>"Save Draft"</Button>
                        </form>
                    </CardContent>
                </Card>

                <Card class="builder-page__preview">
                    <CardHeader>
                        <CardTitle>"Preview"</CardTitle>
                        <Badge>{move || draft().status.label()}</Badge>
                    </CardHeader>
                    <CardContent>
                        <InfoCard
                            title="Campaign Name"
                            value=Signal::derive(move || {
                                let name = draft().name;
                                if name.trim().is_empty() { "Untitled campaign".to_owned() } else { name }
                            })
                        />
                        <InfoCard title="Budget" value=Signal::derive(preview_budget)/>
                        <InfoCard
                            title="Target Audience"
                            value=Signal::derive(move || {
                                let audience = draft().target_audience;
                                if audience.trim().is_empty() { "N/A".to_owned() } else { audience }
                            })
                        />
                    </CardContent>
                </Card>
            </div>

            <Show when=move || state.with(|s| !s.saved.is_empty())>
                <section class="builder-page__saved">
                    <h2 class="page__section-title">"Saved this session"</h2>
                    <ul>
                        {move || {
                            state
                                .with(|s| s.saved.clone())
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <li class="builder-page__saved-item">
                                            <span>{c.name}</span>
                                            <Badge>{c.status.label()}</Badge>
                                            <span>{format_currency(c.budget)}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </Show>
        </div>
    }
}
