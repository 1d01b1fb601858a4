use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

use fractic_server_error::{CriticalError, ServerError};
use iso_currency::Currency;
use rusqlite::{params, Connection};

use crate::{
    data::models::paid_at_model::PaidAtModel,
    entities::{ChatId, MessageId, NewPaymentRecord, PaymentId, PaymentRecord},
    errors::{CorruptPaymentRow, StorageFailure},
};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS payments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,  -- never reused, even after a clear
    source_chat_id INTEGER NOT NULL,
    source_message_id INTEGER NOT NULL,
    amount REAL NOT NULL,
    currency TEXT NOT NULL,                -- ISO 4217 code
    paid_at TEXT NOT NULL,                 -- YYYY-MM-DD HH:MM:SS, no timezone
    raw_text TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS payments_paid_at ON payments (paid_at);
"#;

pub(crate) trait PaymentsDatasource: Send + Sync {
    fn insert(&self, record: NewPaymentRecord) -> Result<PaymentRecord, ServerError>;

    /// Records with `start <= paid_at < end`, ordered by `paid_at` then id.
    fn select_between(&self, start: &str, end: &str) -> Result<Vec<PaymentRecord>, ServerError>;

    fn delete_all(&self) -> Result<usize, ServerError>;

    fn count(&self) -> Result<u64, ServerError>;
}

/// Single long-lived connection. The mutex serializes every operation, so a
/// clear never interleaves with an insert.
pub(crate) struct PaymentsSqliteDatasourceImpl {
    conn: Mutex<Connection>,
}

struct PaymentRow {
    id: i64,
    source_chat_id: i64,
    source_message_id: i64,
    amount: f64,
    currency: String,
    paid_at: String,
    raw_text: String,
}

impl PaymentRow {
    fn into_record(self) -> Result<PaymentRecord, ServerError> {
        let currency = Currency::from_code(&self.currency).ok_or_else(|| {
            CorruptPaymentRow::new(
                self.id,
                &format!("unknown currency code '{}'", self.currency),
            )
        })?;
        let paid_at = PaidAtModel::from_storage(self.id, &self.paid_at)?;
        Ok(PaymentRecord {
            id: PaymentId(self.id),
            source_chat_id: ChatId(self.source_chat_id),
            source_message_id: MessageId(self.source_message_id),
            amount: self.amount,
            currency,
            paid_at: paid_at.into(),
            raw_text: self.raw_text,
        })
    }
}

impl PaymentsSqliteDatasourceImpl {
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<Self, ServerError> {
        let conn =
            Connection::open(path.as_ref()).map_err(|e| StorageFailure::with_debug("open", &e))?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, ServerError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StorageFailure::with_debug("open", &e))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, ServerError> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| StorageFailure::with_debug("create schema", &e))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ServerError> {
        self.conn
            .lock()
            .map_err(|e| CriticalError::with_debug("payment store lock poisoned", &e.to_string()))
    }
}

impl PaymentsDatasource for PaymentsSqliteDatasourceImpl {
    fn insert(&self, record: NewPaymentRecord) -> Result<PaymentRecord, ServerError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO payments (source_chat_id, source_message_id, amount, currency, paid_at, raw_text) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.source_chat_id.0,
                record.source_message_id.0,
                record.payment.amount,
                record.payment.currency.code(),
                PaidAtModel::to_storage(&record.payment.paid_at),
                &record.raw_text,
            ],
        )
        .map_err(|e| StorageFailure::with_debug("append", &e))?;
        let id = conn.last_insert_rowid();
        Ok(record.into_record(PaymentId(id)))
    }

    fn select_between(&self, start: &str, end: &str) -> Result<Vec<PaymentRecord>, ServerError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, source_chat_id, source_message_id, amount, currency, paid_at, raw_text FROM payments WHERE paid_at >= ?1 AND paid_at < ?2 ORDER BY paid_at, id",
            )
            .map_err(|e| StorageFailure::with_debug("query", &e))?;
        let rows = stmt
            .query_map(params![start, end], |row| {
                Ok(PaymentRow {
                    id: row.get(0)?,
                    source_chat_id: row.get(1)?,
                    source_message_id: row.get(2)?,
                    amount: row.get(3)?,
                    currency: row.get(4)?,
                    paid_at: row.get(5)?,
                    raw_text: row.get(6)?,
                })
            })
            .map_err(|e| StorageFailure::with_debug("query", &e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageFailure::with_debug("query", &e))?;
        rows.into_iter().map(PaymentRow::into_record).collect()
    }

    fn delete_all(&self) -> Result<usize, ServerError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM payments", [])
            .map_err(|e| StorageFailure::with_debug("clear", &e))
    }

    fn count(&self) -> Result<u64, ServerError> {
        let conn = self.lock()?;
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM payments", [], |row| row.get(0))
            .map_err(|e| StorageFailure::with_debug("count", &e))?;
        Ok(n as u64)
    }
}
