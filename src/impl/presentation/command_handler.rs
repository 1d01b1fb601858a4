use std::sync::Arc;

use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    entities::{Clock, InboundMessage, ReportSink},
    presentation::{
        admin_handler::AdminHandler,
        command::Command,
        report_handler::{ReportHandler, ReportOutcome},
        utils::deliver,
    },
};

const START_TEXT: &str = "Hello! I record payment notifications and publish summaries.\n\
/chatid - show this chat's ID\n\
/summary [YYYY-MM-DD] - daily summary (default: today)\n\
/month [YYYY-MM] - monthly summary (default: this month)";

/// Routes chat commands. Replies meant for the invoker (greeting, chat id,
/// usage messages) go back to the invoking chat; reports and administrative
/// notices go to the summary chat.
pub(crate) struct CommandHandler {
    reports: Arc<ReportHandler>,
    admin: AdminHandler,
    sink: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
    bot_username: Option<String>,
}

impl CommandHandler {
    pub(crate) fn new(
        reports: Arc<ReportHandler>,
        admin: AdminHandler,
        sink: Arc<dyn ReportSink>,
        clock: Arc<dyn Clock>,
        bot_username: Option<String>,
    ) -> Self {
        Self {
            reports,
            admin,
            sink,
            clock,
            bot_username,
        }
    }

    /// Returns `false` if the text is not a known command for this bot.
    pub(crate) async fn handle(&self, message: &InboundMessage) -> Result<bool, ServerError> {
        let Some(command) = Command::parse(&message.text, self.bot_username.as_deref()) else {
            debug!(chat_id = message.chat_id.0, "ignoring unknown or foreign command");
            return Ok(false);
        };
        debug!(chat_id = message.chat_id.0, command = ?command, "handling command");
        match command {
            Command::Start => self.reply(message, START_TEXT).await,
            Command::ChatId => {
                let text = format!(
                    "Chat ID: {}\nTitle: {}",
                    message.chat_id,
                    message.chat_title.as_deref().unwrap_or("Private chat")
                );
                self.reply(message, &text).await;
            }
            Command::Summary(arg) => {
                let outcome = self.reports.daily(arg.as_deref(), self.clock.today()).await?;
                self.reply_usage(message, outcome).await;
            }
            Command::Month(arg) => {
                let outcome = self
                    .reports
                    .monthly(arg.as_deref(), self.clock.today())
                    .await?;
                self.reply_usage(message, outcome).await;
            }
            Command::Clear => {
                self.admin.clear_all(message.sender_id).await?;
            }
        }
        Ok(true)
    }

    async fn reply(&self, message: &InboundMessage, text: &str) {
        deliver(self.sink.as_ref(), message.chat_id, text).await;
    }

    async fn reply_usage(&self, message: &InboundMessage, outcome: ReportOutcome) {
        if let ReportOutcome::Usage(usage) = outcome {
            self.reply(message, usage).await;
        }
    }
}
