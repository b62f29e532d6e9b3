use super::*;

#[test]
fn stylesheet_hides_everything_but_print_area() {
    let css = print_stylesheet();
    assert!(css.starts_with("@media print {"));
    assert!(css.contains("body * { visibility: hidden; }"));
    assert!(css.contains("#print-area, #print-area * { visibility: visible; }"));
    assert!(css.contains("#print-area { position: absolute; left: 0; top: 0; width: 100%; }"));
    assert!(css.contains(".no-print { display: none; }"));
}

#[test]
fn stylesheet_braces_are_balanced() {
    let css = print_stylesheet();
    assert_eq!(css.matches('{').count(), css.matches('}').count());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn print_page_is_noop_outside_browser() {
    print_page();
}
