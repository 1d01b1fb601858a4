use chrono::NaiveDateTime;
use fractic_server_error::ServerError;

use crate::errors::CorruptPaymentRow;

/// Layout of the timestamp inside a payment notification,
/// e.g. `11-Dec-2025 03:46PM`.
const NOTIFICATION_FORMAT: &str = "%d-%b-%Y %I:%M%p";

/// Layout used in the store. Sorts lexicographically in chronological order,
/// which the range queries rely on.
pub(crate) const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug)]
pub(crate) struct PaidAtModel(NaiveDateTime);

impl PaidAtModel {
    /// Combines the date and clock-time captures of a notification. Returns
    /// `None` for anything chrono cannot read (e.g. `31-Feb-2025`).
    pub(crate) fn from_notification(date: &str, time: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), NOTIFICATION_FORMAT)
            .ok()
            .map(PaidAtModel)
    }

    pub(crate) fn from_storage(id: i64, s: &str) -> Result<Self, ServerError> {
        NaiveDateTime::parse_from_str(s, STORAGE_FORMAT)
            .map(PaidAtModel)
            .map_err(|e| CorruptPaymentRow::with_debug(id, "invalid paid_at timestamp", &e))
    }

    pub(crate) fn to_storage(dt: &NaiveDateTime) -> String {
        dt.format(STORAGE_FORMAT).to_string()
    }
}

impl Into<NaiveDateTime> for PaidAtModel {
    fn into(self) -> NaiveDateTime {
        self.0
    }
}
