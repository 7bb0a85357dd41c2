//! Monthly summary formatting

use crate::reports::MonthlySummary;

/// Format a monthly summary for terminal display
pub fn format_monthly_summary(year: i32, month: u32, summary: &MonthlySummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {:04}-{:02}\n", year, month));
    output.push_str(&format!("  Income:       {:>18}\n", summary.income_total.to_string()));
    output.push_str(&format!("  Expenses:     {:>18}\n", summary.expense_total.to_string()));
    output.push_str(&format!("  Balance:      {:>18}\n", summary.balance.to_string()));
    output.push_str(&format!("  Transactions: {:>18}\n", summary.count));
    output
}
