//! Human-readable footprint summary
//!
//! Values are rounded to two decimals here and nowhere else.

use crate::constants::AVERAGE_AMERICAN_TONS;
use crate::result::FootprintResult;

/// Width of the proportional bar drawn for each category
const BAR_WIDTH: usize = 20;

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Render the results summary
pub fn render(result: &FootprintResult) -> String {
    let mut out = String::new();

    out.push_str("=== Your Carbon Footprint Results ===\n\n");
    for share in result.shares() {
        out.push_str(&format!(
            "{:<16}{:>8.2} tons CO₂e  {} {:>5.1}%\n",
            share.category.label(),
            share.tons,
            bar(share.percent),
            share.percent
        ));
    }
    out.push_str("─────────────────────────────────────────────────────────\n");
    out.push_str(&format!("{:<16}{:>8.2} tons\n\n", "Total Carbon", result.total));

    out.push_str(&format!(
        "Your impact level is {}\n",
        result.impact_level()
    ));
    out.push_str(&format!(
        "The average American produces about {} tons CO₂e per year\n",
        AVERAGE_AMERICAN_TONS
    ));

    out
}
