use std::sync::Arc;

use fractic_server_error::ServerError;
use tokio::task::JoinHandle;
use tracing::info;

use crate::{
    data::{
        datasources::bot_config_ron_datasource::{
            BotConfigDatasource as _, BotConfigRonDatasourceImpl,
        },
        repositories::payments_repository_impl::PaymentsRepositoryImpl,
    },
    domain::{
        logic::payment_text_parser::PaymentTextParser,
        repositories::payments_repository::PaymentsRepository as _,
        usecases::{
            clear_payments_usecase::ClearPaymentsUsecaseImpl,
            ingest_payment_usecase::IngestPaymentUsecaseImpl,
            summarize_payments_usecase::SummarizePaymentsUsecaseImpl,
        },
    },
    entities::{
        BotConfig, Clock, InboundMessage, PaymentRecord, QueryPeriod, ReportSink, SystemClock,
    },
    impl_ext::scheduler::daily_summary::spawn_daily_summary,
    presentation::{
        admin_handler::AdminHandler, command::Command, command_handler::CommandHandler,
        ingestion_handler::IngestionHandler, report_handler::ReportHandler,
    },
};

/// Wires the payment store, parser and handlers behind a single entry point
/// for the chat transport.
pub struct PaymentSummaryBot {
    config: BotConfig,
    ingestion_handler: IngestionHandler,
    command_handler: CommandHandler,
    report_handler: Arc<ReportHandler>,
    clock: Arc<dyn Clock>,
}

impl PaymentSummaryBot {
    pub fn new(config: BotConfig, sink: Arc<dyn ReportSink>) -> Result<Self, ServerError> {
        Self::with_clock(config, sink, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: BotConfig,
        sink: Arc<dyn ReportSink>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ServerError> {
        let payments_repository = Arc::new(PaymentsRepositoryImpl::open(&config.database_path)?);
        info!(
            database_path = %config.database_path.display(),
            stored_payments = payments_repository.count()?,
            "payment store opened"
        );

        let ingestion_handler = IngestionHandler::new(
            config.main_chat_id,
            Arc::new(IngestPaymentUsecaseImpl::new(
                payments_repository.clone(),
                PaymentTextParser::new(&config.currencies),
            )),
        );
        let report_handler = Arc::new(ReportHandler::new(
            config.summary_chat_id,
            Arc::new(SummarizePaymentsUsecaseImpl::new(payments_repository.clone())),
            sink.clone(),
        ));
        let admin_handler = AdminHandler::new(
            config.admin_user_ids.clone(),
            config.summary_chat_id,
            Arc::new(ClearPaymentsUsecaseImpl::new(payments_repository)),
            sink.clone(),
        );
        let command_handler = CommandHandler::new(
            report_handler.clone(),
            admin_handler,
            sink,
            clock.clone(),
            config.bot_username.clone(),
        );

        Ok(Self {
            config,
            ingestion_handler,
            command_handler,
            report_handler,
            clock,
        })
    }

    pub fn from_config_string(s: &str, sink: Arc<dyn ReportSink>) -> Result<Self, ServerError> {
        Self::new(BotConfigRonDatasourceImpl::new().from_string(s)?, sink)
    }

    pub fn from_config_file<P>(path: P, sink: Arc<dyn ReportSink>) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::new(BotConfigRonDatasourceImpl::new().from_file(path)?, sink)
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Handles one inbound message: commands are routed to the command
    /// handler, anything else is treated as a potential payment notification.
    /// Returns the stored record when the message was a payment.
    pub async fn on_message(
        &self,
        message: &InboundMessage,
    ) -> Result<Option<PaymentRecord>, ServerError> {
        if Command::is_command(&message.text) {
            self.command_handler.handle(message).await?;
            return Ok(None);
        }
        self.ingestion_handler.handle(message).await
    }

    /// Computes the summary for `period` and publishes it to the summary chat.
    /// Returns the published text.
    pub async fn publish_summary(&self, period: &QueryPeriod) -> Result<String, ServerError> {
        self.report_handler.publish(period).await
    }

    /// Starts the daily summary task if `daily_summary_at` is configured.
    /// Must be called from within a tokio runtime.
    pub fn spawn_daily_summary(&self) -> Option<JoinHandle<()>> {
        self.config.daily_summary_at.map(|at| {
            spawn_daily_summary(self.report_handler.clone(), self.clock.clone(), at)
        })
    }
}
