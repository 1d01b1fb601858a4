use chrono::{Datelike, NaiveDate, NaiveDateTime};
use fractic_server_error::{CriticalError, ServerError};

/// Calendar period a summary is computed over. Comparisons are made on the
/// naive date and time of each payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPeriod {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

// --

impl QueryPeriod {
    /// Returns `None` if the month is not a valid calendar month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| QueryPeriod::Month { year, month })
    }

    pub fn month_of(date: NaiveDate) -> Self {
        QueryPeriod::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, dt: &NaiveDateTime) -> bool {
        match self {
            QueryPeriod::Day(day) => dt.date() == *day,
            QueryPeriod::Month { year, month } => {
                dt.date().year() == *year && dt.date().month() == *month
            }
        }
    }

    /// Half-open range `[start, end)` covering the period.
    pub(crate) fn bounds(&self) -> Result<(NaiveDateTime, NaiveDateTime), ServerError> {
        let (start, end) = match self {
            QueryPeriod::Day(day) => (Some(*day), day.succ_opt()),
            QueryPeriod::Month { year, month } => {
                // First day of next month.
                let (next_year, next_month) = if *month == 12 {
                    (*year + 1, 1)
                } else {
                    (*year, *month + 1)
                };
                (
                    NaiveDate::from_ymd_opt(*year, *month, 1),
                    NaiveDate::from_ymd_opt(next_year, next_month, 1),
                )
            }
        };
        let midnight = |d: Option<NaiveDate>| d.and_then(|d| d.and_hms_opt(0, 0, 0));
        match (midnight(start), midnight(end)) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(CriticalError::with_debug(
                "query period does not map to a valid date range",
                self,
            )),
        }
    }
}
