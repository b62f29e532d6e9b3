use futures::executor::block_on;

use super::*;

#[test]
fn fetch_error_messages_name_the_resource() {
    let err = FetchError::rejected("variants", "timeout");
    assert_eq!(err.to_string(), "variants request rejected: timeout");

    let err = FetchError::NotFound { resource: "research paper", id: "p9".to_owned() };
    assert_eq!(err.to_string(), "research paper 'p9' not found");
}

#[test]
fn default_latency_is_zero_outside_the_browser() {
    assert_eq!(MockDataSource::default().latency_ms, 0);
    assert_eq!(MockDataSource::immediate().latency_ms, 0);
}

#[test]
fn mock_campaigns_have_unique_ids_in_order() {
    let campaigns = block_on(MockDataSource::immediate().list_campaigns()).unwrap();
    let ids: Vec<&str> = campaigns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert_eq!(campaigns[0].name, "Autumn Launch");
    assert_eq!(campaigns[1].name, "Holiday Promo");
    assert_eq!(campaigns[0].status, CampaignStatus::Active);
    assert_eq!(campaigns[1].target_audience.as_deref(), Some("Families"));
}

#[test]
fn mock_children_reference_the_requested_campaign() {
    let api = MockDataSource::immediate();
    let variants = block_on(api.list_variants("c2")).unwrap();
    assert_eq!(variants.len(), 2);
    assert!(variants.iter().all(|v| v.campaign_id == "c2"));

    let analytics = block_on(api.campaign_analytics("c2")).unwrap();
    assert_eq!(analytics.campaign_id, "c2");
    assert_eq!(analytics.recommendations, vec!["Test stronger CTA", "Add urgency"]);

    let judgements = block_on(api.list_judgements("c2")).unwrap();
    assert_eq!(judgements[0].judge, JudgeKind::AiBot);
    assert!((judgements[0].score - 78.0).abs() < f64::EPSILON);

    let surveys = block_on(api.list_surveys("c2")).unwrap();
    assert_eq!(surveys[0].respondents, 120);
}

#[test]
fn get_paper_echoes_requested_id() {
    let paper = block_on(MockDataSource::immediate().get_paper("p-42")).unwrap();
    assert_eq!(paper.id, "p-42");
    assert_eq!(paper.authors, vec!["Jane Doe", "John Smith"]);
    let config = paper.experiment_config.unwrap();
    assert_eq!(config.model_name, "gpt-4-class");
    assert_eq!(config.hyperparameters.get("top_p"), Some(&0.9));
}

#[test]
fn get_paper_blank_id_is_not_found() {
    let err = block_on(MockDataSource::immediate().get_paper("  ")).unwrap_err();
    assert!(matches!(err, FetchError::NotFound { .. }));
}

#[test]
fn paper_library_contains_the_sample() {
    let papers = block_on(MockDataSource::immediate().list_papers()).unwrap();
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].id, SAMPLE_PAPER_ID);
}
