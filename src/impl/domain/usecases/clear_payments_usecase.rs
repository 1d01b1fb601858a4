use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::payments_repository_impl::PaymentsRepositoryImpl,
    domain::repositories::payments_repository::PaymentsRepository,
};

/// Administrative reset. Authorization is the caller's responsibility.
#[async_trait]
pub trait ClearPaymentsUsecase: Send + Sync {
    /// Removes every stored payment and returns how many were removed.
    async fn clear(&self) -> Result<usize, ServerError>;
}

pub(crate) struct ClearPaymentsUsecaseImpl<
    R1 = PaymentsRepositoryImpl, // Default.
> where
    R1: PaymentsRepository,
{
    payments_repository: Arc<R1>,
}

#[async_trait]
impl<R1> ClearPaymentsUsecase for ClearPaymentsUsecaseImpl<R1>
where
    R1: PaymentsRepository,
{
    async fn clear(&self) -> Result<usize, ServerError> {
        self.payments_repository.clear_all()
    }
}

impl<R1: PaymentsRepository> ClearPaymentsUsecaseImpl<R1> {
    pub(crate) fn new(payments_repository: Arc<R1>) -> Self {
        ClearPaymentsUsecaseImpl {
            payments_repository,
        }
    }
}
