use super::*;

#[test]
fn new_survey_trims_and_starts_empty() {
    let survey = new_survey("c1", "  How clear is the offer?  ").unwrap();
    assert_eq!(survey.campaign_id, "c1");
    assert_eq!(survey.respondents, 0);
    assert_eq!(survey.question.as_deref(), Some("How clear is the offer?"));
    assert!(!survey.id.is_empty());
}

#[test]
fn new_survey_refuses_blank_question() {
    assert!(new_survey("c1", "   \n").is_none());
}

#[test]
fn total_respondents_sums_all() {
    let a = Survey { id: "s1".into(), campaign_id: "c1".into(), respondents: 120, question: None };
    let b = Survey { id: "s2".into(), campaign_id: "c1".into(), respondents: 30, question: None };
    assert_eq!(total_respondents(&[a, b]), 150);
    assert_eq!(total_respondents(&[]), 0);
}
