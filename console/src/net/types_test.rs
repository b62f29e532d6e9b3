use super::*;

// =============================================================
// CampaignStatus
// =============================================================

#[test]
fn campaign_status_default_is_draft() {
    assert_eq!(CampaignStatus::default(), CampaignStatus::Draft);
}

#[test]
fn campaign_status_parse_accepts_wire_names() {
    for status in CampaignStatus::ALL {
        assert_eq!(CampaignStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(CampaignStatus::parse("archived"), None);
    assert_eq!(CampaignStatus::parse("Active"), None);
}

#[test]
fn campaign_status_serializes_snake_case() {
    let json = serde_json::to_value(CampaignStatus::Active).unwrap();
    assert_eq!(json, serde_json::json!("active"));
}

// =============================================================
// Campaign
// =============================================================

#[test]
fn campaign_deserializes_minimal_record_with_defaults() {
    let campaign: Campaign = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Autumn Launch"
    }))
    .unwrap();
    assert_eq!(campaign.id(), "c1");
    assert_eq!(campaign.status, CampaignStatus::Draft);
    assert!(campaign.budget.abs() < f64::EPSILON);
    assert!(campaign.target_audience.is_none());
}

#[test]
fn campaign_rejects_unknown_status() {
    let result: Result<Campaign, _> = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Autumn Launch",
        "status": "exploded"
    }));
    assert!(result.is_err());
}

// =============================================================
// Judgement
// =============================================================

#[test]
fn judgement_reads_judge_type_field() {
    let judgement: Judgement = serde_json::from_value(serde_json::json!({
        "id": "j1",
        "campaign_id": "c1",
        "judge_type": "ai_bot",
        "score": 78
    }))
    .unwrap();
    assert_eq!(judgement.judge, JudgeKind::AiBot);
    assert!(judgement.recommendations.is_empty());
}

// =============================================================
// ResearchPaper
// =============================================================

#[test]
fn research_paper_maps_abstract_keyword_field() {
    let paper: ResearchPaper = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "title": "T",
        "created_date": "2026-01-02T00:00:00Z",
        "abstract": "Short summary",
        "content": "# Body"
    }))
    .unwrap();
    assert_eq!(paper.abstract_text, "Short summary");
    assert!(paper.experiment_config.is_none());
    assert!(paper.reproducibility_artifacts.is_empty());

    let back = serde_json::to_value(&paper).unwrap();
    assert_eq!(back["abstract"], "Short summary");
}

#[test]
fn experiment_config_maps_are_ordered_by_key() {
    let config: ExperimentConfig = serde_json::from_value(serde_json::json!({
        "model_name": "m",
        "dataset": "d",
        "metrics": { "f1": 0.88, "accuracy": 0.91 }
    }))
    .unwrap();
    let keys: Vec<&str> = config.metrics.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["accuracy", "f1"]);
    assert!(config.hyperparameters.is_empty());
}
