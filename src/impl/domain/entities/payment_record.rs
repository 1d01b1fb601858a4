use chrono::NaiveDateTime;
use iso_currency::Currency;

use super::chat::{ChatId, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaymentId(pub(crate) i64);

/// Fields extracted from the text of a payment notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPayment {
    pub amount: f64,
    pub currency: Currency,
    /// Date and time stated in the notification text (not the delivery time
    /// of the message). Carries no timezone.
    pub paid_at: NaiveDateTime,
}

/// A payment ready to be appended to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentRecord {
    pub source_chat_id: ChatId,
    pub source_message_id: MessageId,
    pub payment: ParsedPayment,
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub source_chat_id: ChatId,
    pub source_message_id: MessageId,
    pub amount: f64,
    pub currency: Currency,
    pub paid_at: NaiveDateTime,
    pub raw_text: String,
}

// --

impl PaymentId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl NewPaymentRecord {
    pub(crate) fn into_record(self, id: PaymentId) -> PaymentRecord {
        PaymentRecord {
            id,
            source_chat_id: self.source_chat_id,
            source_message_id: self.source_message_id,
            amount: self.payment.amount,
            currency: self.payment.currency,
            paid_at: self.payment.paid_at,
            raw_text: self.raw_text,
        }
    }
}
