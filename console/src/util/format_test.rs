use super::*;

// =============================================================
// format_currency
// =============================================================

#[test]
fn currency_groups_thousands() {
    assert_eq!(format_currency(25_000.0), "$25,000");
    assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    assert_eq!(format_currency(999.0), "$999");
}

#[test]
fn currency_rounds_and_handles_zero() {
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(1499.6), "$1,500");
}

#[test]
fn currency_negative_and_non_finite() {
    assert_eq!(format_currency(-2500.0), "-$2,500");
    assert_eq!(format_currency(f64::NAN), "$0");
}

// =============================================================
// format_percent / capitalize
// =============================================================

#[test]
fn percent_has_one_decimal() {
    assert_eq!(format_percent(4.1), "4.1%");
    assert_eq!(format_percent(12.0), "12.0%");
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("active"), "Active");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("draft mode"), "Draft mode");
}

// =============================================================
// dates
// =============================================================

#[test]
fn long_date_formats_month_name() {
    assert_eq!(format_long_date("2026-10-16T09:30:00Z"), "October 16, 2026");
    assert_eq!(format_long_date("2026-03-05T00:00:00+02:00"), "March 5, 2026");
}

#[test]
fn long_date_passes_through_garbage() {
    assert_eq!(format_long_date("yesterday"), "yesterday");
}

#[test]
fn clock_shows_hours_and_minutes() {
    let ts = DateTime::parse_from_rfc3339("2026-10-16T14:05:59Z").unwrap().with_timezone(&Utc);
    assert_eq!(format_clock(&ts), "14:05");
}

// =============================================================
// pretty_json
// =============================================================

#[test]
fn pretty_json_is_indented_and_sorted() {
    let map = BTreeMap::from([("top_p".to_owned(), 0.9), ("temperature".to_owned(), 0.7)]);
    assert_eq!(pretty_json(&map), "{\n  \"temperature\": 0.7,\n  \"top_p\": 0.9\n}");
}

#[test]
fn pretty_json_empty_map() {
    assert_eq!(pretty_json(&BTreeMap::new()), "{}");
}
