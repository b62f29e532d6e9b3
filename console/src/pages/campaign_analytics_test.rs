use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::components::judge_bot::analyze;
use crate::components::survey_manager::new_survey;
use crate::net::MockDataSource;
use crate::net::testing::{Faults, ScriptedApi};
use crate::net::types::{CampaignStatus, JudgeKind};
use crate::state::view_state::{Readiness, ViewState, change_selection, load_parents};

fn loaded() -> Rc<RefCell<AnalyticsState>> {
    let source = AnalyticsSource::new(MockDataSource::immediate());
    let cell = Rc::new(RefCell::new(AnalyticsState::new(SupersedePolicy::LatestSelection)));
    block_on(load_parents(&source, &cell));
    cell
}

#[test]
fn overview_formats_fixture_campaign() {
    let campaign = Campaign {
        id: "c1".to_owned(),
        name: "Autumn Launch".to_owned(),
        status: CampaignStatus::Active,
        budget: 25_000.0,
        target_audience: Some("Gen Z".to_owned()),
    };
    let fields = overview_fields(&campaign);
    assert_eq!(fields[0], ("Campaign Name", "Autumn Launch".to_owned()));
    assert_eq!(fields[1], ("Status", "Active".to_owned()));
    assert_eq!(fields[2], ("Budget", "$25,000".to_owned()));
    assert_eq!(fields[3], ("Target Audience", "Gen Z".to_owned()));
}

#[test]
fn overview_defaults_missing_values() {
    let campaign = Campaign {
        id: "c9".to_owned(),
        name: "Bare".to_owned(),
        status: CampaignStatus::Draft,
        budget: f64::NAN,
        target_audience: None,
    };
    let fields = overview_fields(&campaign);
    assert_eq!(fields[2].1, "$0");
    assert_eq!(fields[3].1, "N/A");
}

#[test]
fn mount_joins_judgements_and_surveys() {
    let cell = loaded();
    let state = cell.borrow();
    assert_eq!(state.selected_id(), Some("c1"));
    assert_eq!(state.view(), &ViewState::Ready(Readiness::HasData));
    let data = state.children().unwrap();
    assert_eq!(data.judgements.len(), 1);
    assert_eq!(data.judgements[0].judge, JudgeKind::AiBot);
    assert_eq!(data.surveys[0].respondents, 120);
}

#[test]
fn local_results_append_without_refetch() {
    let cell = loaded();
    let campaign = cell.borrow().selected_parent().cloned().unwrap();
    append_judgement(&mut cell.borrow_mut(), analyze(&campaign));
    append_survey(&mut cell.borrow_mut(), new_survey("c1", "Would you click?").unwrap());

    let state = cell.borrow();
    let data = state.children().unwrap();
    assert_eq!(data.judgements.len(), 2);
    assert_eq!(data.surveys.len(), 2);
    assert_eq!(state.cycle(), 1);
}

#[test]
fn append_without_data_is_dropped() {
    let mut state = AnalyticsState::default();
    let campaign = Campaign {
        id: "c1".to_owned(),
        name: "A".to_owned(),
        status: CampaignStatus::Active,
        budget: 1.0,
        target_audience: None,
    };
    append_judgement(&mut state, analyze(&campaign));
    assert!(state.children().is_none());
}

#[test]
fn switching_campaign_fetches_both_collections_once() {
    let api = ScriptedApi::default();
    let source = AnalyticsSource::new(api);
    let cell = Rc::new(RefCell::new(AnalyticsState::new(SupersedePolicy::LatestSelection)));
    block_on(load_parents(&source, &cell));
    block_on(change_selection(&source, &cell, "c2"));
    block_on(change_selection(&source, &cell, "c2"));

    assert_eq!(
        source.api.calls(),
        vec!["campaigns:", "judgements:c1", "surveys:c1", "judgements:c2", "surveys:c2"]
    );
    assert_eq!(cell.borrow().children().unwrap().judgements[0].campaign_id, "c2");
}

#[test]
fn survey_rejection_discards_judgements_too() {
    let source = AnalyticsSource::new(ScriptedApi::failing(Faults { surveys: true, ..Faults::default() }));
    let cell = Rc::new(RefCell::new(AnalyticsState::default()));
    block_on(load_parents(&source, &cell));

    let state = cell.borrow();
    assert!(state.children().is_none());
    assert_eq!(state.failures(), 1);
}
