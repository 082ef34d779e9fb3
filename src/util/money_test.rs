use super::*;

fn pledge(amount: f64) -> Pledge {
    Pledge {
        id: 1,
        amount,
        comment: None,
        anonymous: false,
        supporter: None,
        supporter_username: None,
        fundraiser: None,
    }
}

// =============================================================
// Totals and progress
// =============================================================

#[test]
fn total_of_no_pledges_is_zero() {
    assert_eq!(total_pledged(&[]), 0.0);
}

#[test]
fn total_sums_all_amounts() {
    let pledges = [pledge(10.0), pledge(2.5), pledge(0.5)];
    assert_eq!(total_pledged(&pledges), 13.0);
}

#[test]
fn progress_is_proportional_below_the_goal() {
    assert_eq!(progress_percent(25.0, 100.0), 25.0);
}

#[test]
fn progress_clamps_at_one_hundred() {
    assert_eq!(progress_percent(250.0, 100.0), 100.0);
}

#[test]
fn progress_with_non_positive_goal_is_zero() {
    assert_eq!(progress_percent(50.0, 0.0), 0.0);
    assert_eq!(progress_percent(50.0, -10.0), 0.0);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_usd_uses_two_decimal_places() {
    assert_eq!(format_usd(13.0), "$13.00");
    assert_eq!(format_usd(0.5), "$0.50");
}

#[test]
fn preview_keeps_short_descriptions_intact() {
    assert_eq!(preview("short", 100), "short");
}

#[test]
fn preview_truncates_long_descriptions_with_ellipsis() {
    let long = "x".repeat(150);
    let cut = preview(&long, 100);
    assert_eq!(cut.chars().count(), 103);
    assert!(cut.ends_with("..."));
}

// =============================================================
// Amount parsing
// =============================================================

#[test]
fn parse_amount_accepts_positive_decimals() {
    assert_eq!(parse_amount("12.50"), Some(12.5));
    assert_eq!(parse_amount("  3 "), Some(3.0));
}

#[test]
fn parse_amount_rejects_zero_negative_and_garbage() {
    assert!(parse_amount("0").is_none());
    assert!(parse_amount("-5").is_none());
    assert!(parse_amount("ten").is_none());
    assert!(parse_amount("").is_none());
    assert!(parse_amount("inf").is_none());
    assert!(parse_amount("NaN").is_none());
}
