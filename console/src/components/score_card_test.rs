use super::*;

#[test]
fn score_grade_thresholds() {
    assert_eq!(score_grade(82.0), "Strong");
    assert_eq!(score_grade(80.0), "Strong");
    assert_eq!(score_grade(79.9), "Fair");
    assert_eq!(score_grade(60.0), "Fair");
    assert_eq!(score_grade(12.0), "Needs work");
}
