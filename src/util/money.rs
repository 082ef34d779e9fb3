//! Pledge arithmetic and currency formatting for card and detail views.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use crate::net::types::Pledge;

/// Sum of all pledge amounts toward a fundraiser.
pub fn total_pledged(pledges: &[Pledge]) -> f64 {
    pledges.iter().map(|p| p.amount).sum()
}

/// Funding progress as a percentage of the goal, clamped to 0..=100.
///
/// A non-positive goal reports 0 rather than dividing by zero.
pub fn progress_percent(total: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    ((total / goal) * 100.0).clamp(0.0, 100.0)
}

/// Format a dollar amount with two decimal places.
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Parse a user-entered amount; only strictly positive finite values count.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Truncate a campaign description for card previews.
pub fn preview(description: &str, max_chars: usize) -> String {
    if description.chars().count() <= max_chars {
        description.to_owned()
    } else {
        let cut: String = description.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
