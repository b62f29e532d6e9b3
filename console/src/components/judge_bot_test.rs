use super::*;

fn campaign(status: CampaignStatus, budget: f64, audience: Option<&str>) -> Campaign {
    Campaign {
        id: "c1".to_owned(),
        name: "Autumn Launch".to_owned(),
        status,
        budget,
        target_audience: audience.map(str::to_owned),
    }
}

fn judgement(id: &str, judge: JudgeKind) -> Judgement {
    Judgement { id: id.to_owned(), campaign_id: "c1".to_owned(), judge, score: 50.0, recommendations: vec![] }
}

#[test]
fn analyze_active_funded_campaign() {
    let j = analyze(&campaign(CampaignStatus::Active, 25_000.0, Some("Gen Z")));
    assert_eq!(j.campaign_id, "c1");
    assert_eq!(j.judge, JudgeKind::AiBot);
    // 55 + 15 + 15 + 12.5
    assert!((j.score - 98.0).abs() < f64::EPSILON);
    assert_eq!(j.recommendations, vec!["Run a new A/B test on the headline".to_owned()]);
}

#[test]
fn analyze_draft_without_audience_lists_gaps() {
    let j = analyze(&campaign(CampaignStatus::Draft, 0.0, Some("  ")));
    assert!((j.score - 55.0).abs() < f64::EPSILON);
    assert_eq!(j.recommendations.len(), 3);
    assert_eq!(j.recommendations[0], "Define a target audience");
}

#[test]
fn analyze_is_deterministic_apart_from_id() {
    let c = campaign(CampaignStatus::Paused, 15_000.0, Some("Families"));
    let a = analyze(&c);
    let b = analyze(&c);
    assert_ne!(a.id, b.id);
    assert!((a.score - b.score).abs() < f64::EPSILON);
    assert_eq!(a.recommendations, b.recommendations);
}

#[test]
fn analyze_caps_score_at_hundred() {
    let j = analyze(&campaign(CampaignStatus::Active, 1e12, Some("All")));
    assert!(j.score <= 100.0);
}

#[test]
fn latest_bot_judgement_skips_humans_and_prefers_newest() {
    let list = vec![
        judgement("j1", JudgeKind::AiBot),
        judgement("j2", JudgeKind::AiBot),
        judgement("h1", JudgeKind::Human),
    ];
    assert_eq!(latest_bot_judgement(&list).map(|j| j.id.as_str()), Some("j2"));
    assert!(latest_bot_judgement(&list[2..]).is_none());
}
