use super::*;

fn variant(id: &str, ctr: f64) -> Variant {
    Variant { id: id.to_owned(), campaign_id: "c1".to_owned(), headline: format!("headline {id}"), ctr }
}

#[test]
fn summarize_empty_is_none() {
    assert_eq!(summarize(&[]), None);
}

#[test]
fn summarize_fixture_variants() {
    let s = summarize(&[variant("v1", 3.2), variant("v2", 4.1)]).unwrap();
    assert_eq!(s.count, 2);
    assert_eq!(s.leader_id, "v2");
    assert!((s.best_ctr - 4.1).abs() < 1e-9);
    assert!((s.average_ctr - 3.65).abs() < 1e-9);
    assert!((s.lift - 28.125).abs() < 1e-9);
}

#[test]
fn summarize_tie_keeps_first_leader() {
    let s = summarize(&[variant("a", 2.0), variant("b", 2.0)]).unwrap();
    assert_eq!(s.leader_id, "a");
    assert!(s.lift.abs() < f64::EPSILON);
}

#[test]
fn summarize_zero_worst_reports_no_lift() {
    let s = summarize(&[variant("a", 0.0), variant("b", 5.0)]).unwrap();
    assert_eq!(s.leader_id, "b");
    assert!(s.lift.abs() < f64::EPSILON);
}
