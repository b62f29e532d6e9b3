use super::*;

#[test]
fn join_skips_empty_fragments() {
    assert_eq!(join(&["btn", "", "btn--outline"]), "btn btn--outline");
}

#[test]
fn join_normalizes_whitespace() {
    assert_eq!(join(&["  card ", "card--dashed  extra"]), "card card--dashed extra");
}

#[test]
fn join_of_nothing_is_empty() {
    assert_eq!(join(&[]), "");
    assert_eq!(join(&["", "   "]), "");
}
