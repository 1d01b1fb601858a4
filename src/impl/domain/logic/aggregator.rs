use std::collections::HashMap;

use iso_currency::Currency;

use crate::entities::{CurrencyTotal, PaymentRecord, PaymentSummary};

/// Count and sum of amounts per currency. Currencies with no records are
/// omitted; an empty input gives an empty summary.
pub fn aggregate<'a, I>(records: I) -> PaymentSummary
where
    I: IntoIterator<Item = &'a PaymentRecord>,
{
    let mut groups: HashMap<Currency, Vec<f64>> = HashMap::new();
    for record in records {
        groups.entry(record.currency).or_default().push(record.amount);
    }

    let mut totals: Vec<CurrencyTotal> = groups
        .into_iter()
        .map(|(currency, mut amounts)| {
            // Summed in sorted order so the total does not depend on input
            // order.
            amounts.sort_by(f64::total_cmp);
            CurrencyTotal {
                currency,
                count: amounts.len() as u64,
                total: amounts.iter().sum(),
            }
        })
        .collect();
    totals.sort_by_key(|t| t.currency.code());

    PaymentSummary { totals }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{ChatId, MessageId, PaymentId};

    fn record(id: i64, amount: f64, currency: Currency) -> PaymentRecord {
        PaymentRecord {
            id: PaymentId(id),
            source_chat_id: ChatId(1),
            source_message_id: MessageId(id),
            amount,
            currency,
            paid_at: NaiveDate::from_ymd_opt(2025, 12, 11)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            raw_text: String::new(),
        }
    }

    #[test]
    fn groups_count_and_sum_per_currency() {
        let records = vec![
            record(1, 10.0, Currency::USD),
            record(2, 5.0, Currency::KHR),
            record(3, 20.0, Currency::USD),
        ];
        let summary = aggregate(&records);
        assert_eq!(
            summary.totals,
            vec![
                CurrencyTotal {
                    currency: Currency::KHR,
                    count: 1,
                    total: 5.0
                },
                CurrencyTotal {
                    currency: Currency::USD,
                    count: 2,
                    total: 30.0
                },
            ]
        );
        assert_eq!(summary.transaction_count(), 3);
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let summary = aggregate(&Vec::<PaymentRecord>::new());
        assert!(summary.is_empty());
        assert_eq!(summary.get(Currency::USD), None);
    }

    #[test]
    fn result_does_not_depend_on_input_order() {
        let mut records = vec![
            record(1, 0.1, Currency::USD),
            record(2, 0.2, Currency::USD),
            record(3, 0.3, Currency::USD),
            record(4, 1e16, Currency::USD),
            record(5, 801000.0, Currency::KHR),
        ];
        let forward = aggregate(&records);
        records.reverse();
        let backward = aggregate(&records);
        records.swap(0, 3);
        let shuffled = aggregate(&records);
        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }
}
