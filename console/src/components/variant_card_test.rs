use super::*;

#[test]
fn ctr_bar_scales_to_full_bar_ctr() {
    assert!((ctr_bar_percent(4.1) - 41.0).abs() < 1e-9);
    assert!((ctr_bar_percent(FULL_BAR_CTR) - 100.0).abs() < 1e-9);
}

#[test]
fn ctr_bar_clamps_outliers() {
    assert!((ctr_bar_percent(25.0) - 100.0).abs() < 1e-9);
    assert!(ctr_bar_percent(-1.0).abs() < f64::EPSILON);
}
