use num_format::{Locale, ToFormattedString as _};
use tracing::warn;

use crate::entities::{ChatId, ReportSink};

/// Format an amount with thousands separators and exactly two decimal places
/// (e.g. `801,000.00`).
///
/// For consistency, uses en locale ('.' as decimal mark) regardless of the
/// currency, including zero-decimal ones.
///
/// Rounding is that of `{:.2}` on the exact binary value (0.125 becomes
/// `0.12`); only the integer part is grouped.
pub(crate) fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = match int_part.parse::<u64>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };
    let sign = if amount < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Sends `text` to `chat_id`. Delivery failures are logged and swallowed;
/// nothing is retried.
pub(crate) async fn deliver(sink: &dyn ReportSink, chat_id: ChatId, text: &str) {
    if let Err(e) = sink.send(chat_id, text).await {
        warn!(chat_id = chat_id.0, error = ?e, "message delivery failed");
    }
}
