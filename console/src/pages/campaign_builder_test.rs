use super::*;

fn draft(name: &str, budget: &str, audience: &str) -> CampaignDraft {
    CampaignDraft {
        name: name.to_owned(),
        status: CampaignStatus::Active,
        budget: budget.to_owned(),
        target_audience: audience.to_owned(),
    }
}

#[test]
fn validate_trims_and_parses() {
    let campaign = draft("  Spring Sale ", "$12,500", " Students ").validate().unwrap();
    assert_eq!(campaign.name, "Spring Sale");
    assert_eq!(campaign.status, CampaignStatus::Active);
    assert!((campaign.budget - 12_500.0).abs() < f64::EPSILON);
    assert_eq!(campaign.target_audience.as_deref(), Some("Students"));
    assert!(!campaign.id.is_empty());
}

#[test]
fn blank_budget_and_audience_are_allowed() {
    let campaign = draft("Launch", "", "  ").validate().unwrap();
    assert!(campaign.budget.abs() < f64::EPSILON);
    assert_eq!(campaign.target_audience, None);
}

#[test]
fn validate_rejects_bad_input() {
    assert_eq!(draft("   ", "100", "").validate(), Err(DraftError::BlankName));
    assert_eq!(draft("X", "lots", "").validate(), Err(DraftError::InvalidBudget("lots".to_owned())));
    assert_eq!(draft("X", "-5", "").validate(), Err(DraftError::NegativeBudget));
    assert_eq!(draft("X", "inf", "").validate(), Err(DraftError::InvalidBudget("inf".to_owned())));
}

#[test]
fn submit_saves_and_resets_on_success() {
    let mut state = BuilderState { draft: draft("Launch", "1000", ""), ..BuilderState::default() };
    assert_eq!(state.submit().map(|c| c.name.clone()), Some("Launch".to_owned()));
    assert_eq!(state.saved.len(), 1);
    assert_eq!(state.draft, CampaignDraft::default());
    assert!(state.error.is_none());
}

#[test]
fn submit_keeps_draft_and_records_error_on_failure() {
    let mut state = BuilderState { draft: draft("", "1000", ""), ..BuilderState::default() };
    assert!(state.submit().is_none());
    assert!(state.saved.is_empty());
    assert_eq!(state.draft.budget, "1000");
    assert_eq!(state.error, Some(DraftError::BlankName));
}
