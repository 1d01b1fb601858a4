use std::sync::Mutex;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    entities::{ChatId, ReportSink},
    errors::DeliveryFailure,
};

/// Sink that keeps every message in memory instead of delivering it. Useful
/// for dry runs and tests; `failing()` builds one that rejects everything.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(ChatId, String)>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn sent_to(&self, chat_id: ChatId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(c, _)| *c == chat_id)
            .map(|(_, text)| text)
            .collect()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<(), ServerError> {
        if self.fail {
            return Err(DeliveryFailure::new(chat_id.0));
        }
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((chat_id, text.to_string()));
        Ok(())
    }
}
