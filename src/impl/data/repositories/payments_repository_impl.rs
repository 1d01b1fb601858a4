use std::path::Path;

use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::payments_sqlite_datasource::{
            PaymentsDatasource, PaymentsSqliteDatasourceImpl,
        },
        models::paid_at_model::PaidAtModel,
    },
    domain::repositories::payments_repository::PaymentsRepository,
    entities::{NewPaymentRecord, PaymentRecord, QueryPeriod},
};

pub(crate) struct PaymentsRepositoryImpl<DS = PaymentsSqliteDatasourceImpl>
where
    DS: PaymentsDatasource,
{
    payments_datasource: DS,
}

impl<DS> PaymentsRepository for PaymentsRepositoryImpl<DS>
where
    DS: PaymentsDatasource,
{
    fn append(&self, record: NewPaymentRecord) -> Result<PaymentRecord, ServerError> {
        self.payments_datasource.insert(record)
    }

    fn query_period(&self, period: &QueryPeriod) -> Result<Vec<PaymentRecord>, ServerError> {
        let (start, end) = period.bounds()?;
        self.payments_datasource.select_between(
            &PaidAtModel::to_storage(&start),
            &PaidAtModel::to_storage(&end),
        )
    }

    fn clear_all(&self) -> Result<usize, ServerError> {
        self.payments_datasource.delete_all()
    }

    fn count(&self) -> Result<u64, ServerError> {
        self.payments_datasource.count()
    }
}

impl PaymentsRepositoryImpl<PaymentsSqliteDatasourceImpl> {
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<Self, ServerError> {
        Ok(PaymentsRepositoryImpl {
            payments_datasource: PaymentsSqliteDatasourceImpl::open(path)?,
        })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, ServerError> {
        Ok(PaymentsRepositoryImpl {
            payments_datasource: PaymentsSqliteDatasourceImpl::open_in_memory()?,
        })
    }
}
