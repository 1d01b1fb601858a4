use std::{collections::HashSet, sync::Arc};

use fractic_server_error::ServerError;
use tracing::{error, info, warn};

use crate::{
    entities::{ChatId, ReportSink, UserId},
    presentation::{
        summary_fmt::{clear_failure_notice, clear_success_notice},
        utils::deliver,
    },
    usecases::ClearPaymentsUsecase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClearOutcome {
    Cleared(usize),
    /// Invoker is not on the allow-list. Nothing was done and nothing is
    /// reported back to them.
    Ignored,
}

pub(crate) struct AdminHandler {
    admin_user_ids: HashSet<UserId>,
    summary_chat_id: ChatId,
    clear_usecase: Arc<dyn ClearPaymentsUsecase>,
    sink: Arc<dyn ReportSink>,
}

impl AdminHandler {
    pub(crate) fn new(
        admin_user_ids: HashSet<UserId>,
        summary_chat_id: ChatId,
        clear_usecase: Arc<dyn ClearPaymentsUsecase>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            admin_user_ids,
            summary_chat_id,
            clear_usecase,
            sink,
        }
    }

    /// Empties the payment store if `invoker` is an administrator. The result,
    /// success or failure, is announced in the summary chat; a storage
    /// failure is also returned.
    pub(crate) async fn clear_all(
        &self,
        invoker: Option<UserId>,
    ) -> Result<ClearOutcome, ServerError> {
        let Some(user_id) = invoker.filter(|u| self.admin_user_ids.contains(u)) else {
            warn!(user_id = ?invoker.map(|u| u.0), "ignoring clear request from non-admin");
            return Ok(ClearOutcome::Ignored);
        };
        match self.clear_usecase.clear().await {
            Ok(removed) => {
                info!(user_id = user_id.0, removed, "payment records cleared");
                deliver(
                    self.sink.as_ref(),
                    self.summary_chat_id,
                    &clear_success_notice(removed),
                )
                .await;
                Ok(ClearOutcome::Cleared(removed))
            }
            Err(e) => {
                error!(user_id = user_id.0, error = ?e, "failed to clear payment records");
                deliver(
                    self.sink.as_ref(),
                    self.summary_chat_id,
                    &clear_failure_notice(),
                )
                .await;
                Err(e)
            }
        }
    }
}
