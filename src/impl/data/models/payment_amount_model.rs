use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidPaymentAmount;

#[derive(Debug)]
pub(crate) struct PaymentAmountModel(pub f64);
impl FromStr for PaymentAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Thousands separators are dropped, the decimal fraction is kept.
        let raw = s.trim().replace(',', "");
        let amount = raw
            .parse::<f64>()
            .map_err(|e| InvalidPaymentAmount::with_debug(s, &e))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(InvalidPaymentAmount::new(s));
        }
        Ok(PaymentAmountModel(amount))
    }
}

impl Into<f64> for PaymentAmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
