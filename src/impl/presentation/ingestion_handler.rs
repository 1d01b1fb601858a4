use std::sync::Arc;

use fractic_server_error::ServerError;
use tracing::{debug, error, info};

use crate::{
    entities::{ChatId, InboundMessage, PaymentRecord},
    usecases::IngestPaymentUsecase,
};

/// Entry point for inbound chat messages that may be payment notifications.
pub(crate) struct IngestionHandler {
    main_chat_id: ChatId,
    ingest_usecase: Arc<dyn IngestPaymentUsecase>,
}

impl IngestionHandler {
    pub(crate) fn new(
        main_chat_id: ChatId,
        ingest_usecase: Arc<dyn IngestPaymentUsecase>,
    ) -> Self {
        Self {
            main_chat_id,
            ingest_usecase,
        }
    }

    /// Messages from any chat other than the configured source are dropped
    /// without side effects. Storage failures are returned to the caller.
    pub(crate) async fn handle(
        &self,
        message: &InboundMessage,
    ) -> Result<Option<PaymentRecord>, ServerError> {
        if message.chat_id != self.main_chat_id {
            debug!(chat_id = message.chat_id.0, "ignoring message from non-source chat");
            return Ok(None);
        }
        match self.ingest_usecase.ingest(message).await {
            Ok(Some(record)) => {
                info!(
                    payment_id = record.id.value(),
                    message_id = message.message_id.0,
                    amount = record.amount,
                    currency = record.currency.code(),
                    paid_at = %record.paid_at,
                    "payment recorded"
                );
                Ok(Some(record))
            }
            Ok(None) => {
                debug!(
                    message_id = message.message_id.0,
                    "message is not a payment notification"
                );
                Ok(None)
            }
            Err(e) => {
                error!(message_id = message.message_id.0, error = ?e, "failed to store payment");
                Err(e)
            }
        }
    }
}
