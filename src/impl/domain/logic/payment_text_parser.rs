use std::str::FromStr as _;

use iso_currency::Currency;
use regex::Regex;

use crate::{
    data::models::{paid_at_model::PaidAtModel, payment_amount_model::PaymentAmountModel},
    entities::{ParsedPayment, DEFAULT_CURRENCIES},
};

/// Date followed by a 12-hour clock time, e.g. `11-Dec-2025 03:46PM`.
const DATE_TIME: &str = r"(\d{2}-[A-Za-z]{3}-\d{4})\s+(\d{1,2}:\d{2}[AP]M)";

/// Extracts payment records from free-form notification text such as:
///
/// ```text
/// Received 801,000 KHR from ..., ABA Bank by KHQR,on 11-Dec-2025 03:03PM, ...
/// ```
///
/// Stateless after construction and safe to share between threads. A message
/// is accepted only if both the amount and the timestamp are found; anything
/// else is a silent rejection (`None`). There is deliberately no fallback to
/// the current time when the timestamp is missing.
#[derive(Debug, Clone)]
pub struct PaymentTextParser {
    amount_pattern: Option<Regex>,
    /// Tried in order; the first pattern that matches decides the outcome.
    date_patterns: [Regex; 2],
}

impl PaymentTextParser {
    /// Parser accepting exactly the given currencies.
    pub fn new(currencies: &[Currency]) -> Self {
        let amount_pattern = if currencies.is_empty() {
            None
        } else {
            let codes = currencies
                .iter()
                .map(|c| regex::escape(c.code()))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                Regex::new(&format!(r"Received\s+(\d[\d,]*(?:\.\d+)?)\s+({})\b", codes))
                    .expect("generated amount regex should be valid"),
            )
        };
        Self {
            amount_pattern,
            date_patterns: [
                Regex::new(&format!(r"\bon\s+{}", DATE_TIME))
                    .expect("hardcoded regex should be valid"),
                Regex::new(&format!(r",\s*{}", DATE_TIME))
                    .expect("hardcoded regex should be valid"),
            ],
        }
    }

    pub fn parse(&self, text: &str) -> Option<ParsedPayment> {
        let amount_caps = self.amount_pattern.as_ref()?.captures(text)?;
        let amount: f64 = PaymentAmountModel::from_str(&amount_caps[1]).ok()?.into();
        let currency = Currency::from_code(&amount_caps[2])?;

        let date_caps = self
            .date_patterns
            .iter()
            .find_map(|pattern| pattern.captures(text))?;
        let paid_at = PaidAtModel::from_notification(&date_caps[1], &date_caps[2])?;

        Some(ParsedPayment {
            amount,
            currency,
            paid_at: paid_at.into(),
        })
    }
}

impl Default for PaymentTextParser {
    fn default() -> Self {
        Self::new(&DEFAULT_CURRENCIES)
    }
}
