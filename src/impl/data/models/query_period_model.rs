use std::str::FromStr;

use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::{entities::QueryPeriod, errors::MalformedQueryArgument};

/// Day argument in `YYYY-MM-DD` form.
#[derive(Debug)]
pub(crate) struct DayArgumentModel(NaiveDate);
impl FromStr for DayArgumentModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 10 {
            return Err(MalformedQueryArgument::new("date", s));
        }
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| MalformedQueryArgument::with_debug("date", s, &e))?;
        Ok(DayArgumentModel(d))
    }
}

impl Into<QueryPeriod> for DayArgumentModel {
    fn into(self) -> QueryPeriod {
        QueryPeriod::Day(self.0)
    }
}

/// Month argument in `YYYY-MM` form.
#[derive(Debug)]
pub(crate) struct MonthArgumentModel(NaiveDate);
impl FromStr for MonthArgumentModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 7 {
            return Err(MalformedQueryArgument::new("month", s));
        }
        let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map_err(|e| MalformedQueryArgument::with_debug("month", s, &e))?;
        Ok(MonthArgumentModel(d))
    }
}

impl Into<QueryPeriod> for MonthArgumentModel {
    fn into(self) -> QueryPeriod {
        QueryPeriod::Month {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}
