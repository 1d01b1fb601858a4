use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::chat::ChatId;

/// Outbound side of the chat transport.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn send(&self, chat_id: ChatId, text: &str) -> Result<(), ServerError>;
}
