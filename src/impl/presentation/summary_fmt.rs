use crate::{
    entities::{PaymentSummary, QueryPeriod},
    presentation::utils::format_amount,
};

pub fn period_label(period: &QueryPeriod) -> String {
    match period {
        QueryPeriod::Day(day) => format!("Daily summary for {}", day.format("%Y-%m-%d")),
        QueryPeriod::Month { year, month } => {
            format!("Monthly summary for {:04}-{:02}", year, month)
        }
    }
}

/// Renders a summary as chat text: the label on the first line, then one line
/// per currency in summary order. An empty summary renders as an explicit
/// "no payments" notice rather than a bare label.
pub fn format_summary(label: &str, summary: &PaymentSummary) -> String {
    let mut output = String::new();
    output.push_str(label);
    output.push('\n');
    if summary.is_empty() {
        output.push_str("No payments recorded.");
        return output;
    }
    let lines: Vec<String> = summary
        .totals
        .iter()
        .map(|t| {
            format!(
                "{}: {} ({} {})",
                t.currency.code(),
                format_amount(t.total),
                t.count,
                if t.count == 1 {
                    "transaction"
                } else {
                    "transactions"
                }
            )
        })
        .collect();
    output.push_str(&lines.join("\n"));
    output
}

pub(crate) fn clear_success_notice(removed: usize) -> String {
    format!("All payment records cleared ({} removed).", removed)
}

pub(crate) fn clear_failure_notice() -> String {
    "Failed to clear payment records.".to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use iso_currency::Currency;

    use super::*;
    use crate::entities::CurrencyTotal;

    #[test]
    fn labels_day_and_month() {
        assert_eq!(
            period_label(&QueryPeriod::Day(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())),
            "Daily summary for 2025-01-05"
        );
        assert_eq!(
            period_label(&QueryPeriod::Month {
                year: 2025,
                month: 3
            }),
            "Monthly summary for 2025-03"
        );
    }

    #[test]
    fn formats_one_line_per_currency() {
        let summary = PaymentSummary {
            totals: vec![
                CurrencyTotal {
                    currency: Currency::KHR,
                    count: 1,
                    total: 801000.0,
                },
                CurrencyTotal {
                    currency: Currency::USD,
                    count: 3,
                    total: 1234.5,
                },
            ],
        };
        assert_eq!(
            format_summary("Daily summary for 2025-12-11", &summary),
            "Daily summary for 2025-12-11\nKHR: 801,000.00 (1 transaction)\nUSD: 1,234.50 (3 transactions)"
        );
    }

    #[test]
    fn empty_summary_is_a_no_data_notice() {
        assert_eq!(
            format_summary("Monthly summary for 2025-11", &PaymentSummary::default()),
            "Monthly summary for 2025-11\nNo payments recorded."
        );
    }
}
