use iso_currency::Currency;

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyTotal {
    pub currency: Currency,
    pub count: u64,
    pub total: f64,
}

/// Per-currency totals over a set of payments, ordered by currency code.
/// Currencies without payments are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentSummary {
    pub totals: Vec<CurrencyTotal>,
}

// --

impl PaymentSummary {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn get(&self, currency: Currency) -> Option<&CurrencyTotal> {
        self.totals.iter().find(|t| t.currency == currency)
    }

    pub fn transaction_count(&self) -> u64 {
        self.totals.iter().map(|t| t.count).sum()
    }
}
