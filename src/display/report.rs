//! Report formatting utilities for terminal output

use super::expense::format_amount;

/// Format a per-category summary with a grand total
pub fn format_category_summary(totals: &[(String, f64)], grand_total: f64) -> String {
    if totals.is_empty() {
        return "No expenses to summarize.\n".to_string();
    }

    let width = totals
        .iter()
        .map(|(category, _)| category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut output = String::new();
    for (category, total) in totals {
        output.push_str(&format!(
            "{:width$}  {:>12}  {}\n",
            category,
            format_amount(*total),
            format_share(*total, grand_total),
            width = width
        ));
    }
    output.push_str(&separator(width + 14));
    output.push('\n');
    output.push_str(&format!(
        "{:width$}  {:>12}\n",
        "Total",
        format_amount(grand_total),
        width = width
    ));
    output
}

/// Format a category's share of the total as a percentage
pub fn format_share(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "-".to_string();
    }
    let pct = value / total * 100.0;
    if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
