use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::entities::{NewPaymentRecord, PaymentRecord, QueryPeriod};

/// Durable, append-only collection of payment records.
pub(crate) trait PaymentsRepository: Send + Sync {
    fn append(&self, record: NewPaymentRecord) -> Result<PaymentRecord, ServerError>;

    /// Records paid on `day`, at any time of day.
    fn query_by_date(&self, day: NaiveDate) -> Result<Vec<PaymentRecord>, ServerError> {
        self.query_period(&QueryPeriod::Day(day))
    }

    /// Records paid on any day of the given calendar month.
    fn query_by_month(&self, year: i32, month: u32) -> Result<Vec<PaymentRecord>, ServerError> {
        self.query_period(&QueryPeriod::Month { year, month })
    }

    fn query_period(&self, period: &QueryPeriod) -> Result<Vec<PaymentRecord>, ServerError>;

    /// Irreversibly removes every record. Returns how many were removed.
    fn clear_all(&self) -> Result<usize, ServerError>;

    fn count(&self) -> Result<u64, ServerError>;
}
