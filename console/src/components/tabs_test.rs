use super::*;

#[test]
fn tab_state_marks_matching_value_active() {
    assert_eq!(tab_state("judge-bot", "judge-bot"), "active");
    assert_eq!(tab_state("judge-bot", "human-survey"), "inactive");
}

#[test]
fn trigger_bindings_follow_the_active_tab() {
    Owner::new().with(|| {
        let active = RwSignal::new("judge-bot".to_owned());
        let (state, is_active) = trigger_bindings(active, "human-survey".to_owned());
        assert_eq!(state(), "inactive");
        assert!(!is_active());

        active.set("human-survey".to_owned());
        assert_eq!(state(), "active");
        assert!(is_active());
    });
}
