use chrono::TimeZone;

use super::*;

// =============================================================
// Organization labels
// =============================================================

#[test]
fn known_org_codes_have_labels() {
    assert_eq!(org_label(1), "Platform");
    assert_eq!(org_label(2), "Creator");
    assert_eq!(org_label(3), "Financial Institution");
}

#[test]
fn unknown_org_code_is_empty() {
    assert_eq!(org_label(9), "");
}

#[test]
fn org_labels_join_with_spaces_and_skip_unknowns() {
    assert_eq!(org_labels(&[2, 3]), "Creator Financial Institution");
    assert_eq!(org_labels(&[2, 9]), "Creator");
    assert_eq!(org_labels(&[]), "");
}

// =============================================================
// Amounts and timestamps
// =============================================================

#[test]
fn token_amounts_group_thousands() {
    assert_eq!(format_tokens(0), "0");
    assert_eq!(format_tokens(999), "999");
    assert_eq!(format_tokens(1_234_567), "1,234,567");
    assert_eq!(format_tokens(-50_000), "-50,000");
}

#[test]
fn timestamps_render_to_the_minute() {
    let time = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    assert_eq!(format_timestamp(Some(&time)), "2024-03-01 09:30");
}

#[test]
fn missing_timestamp_renders_a_dash() {
    assert_eq!(format_timestamp(None), "—");
}
