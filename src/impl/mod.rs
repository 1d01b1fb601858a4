// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod bot_config_ron_datasource;
        pub(crate) mod payments_sqlite_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod bot_config_model;
        pub(crate) mod paid_at_model;
        pub(crate) mod payment_amount_model;
        pub(crate) mod query_period_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod payments_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod bot_config;
        pub(crate) mod chat;
        pub(crate) mod clock;
        pub(crate) mod payment_record;
        pub(crate) mod payment_summary;
        pub(crate) mod query_period;
        pub(crate) mod report_sink;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod payment_text_parser;
    }
    pub(crate) mod repositories {
        pub(crate) mod payments_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod clear_payments_usecase;
        pub(crate) mod ingest_payment_usecase;
        pub(crate) mod summarize_payments_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod admin_handler;
    pub(crate) mod command;
    pub(crate) mod command_handler;
    pub(crate) mod ingestion_handler;
    pub(crate) mod report_handler;
    pub(crate) mod summary_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::bot_config::*;
        pub use crate::domain::entities::chat::*;
        pub use crate::domain::entities::clock::*;
        pub use crate::domain::entities::payment_record::*;
        pub use crate::domain::entities::payment_summary::*;
        pub use crate::domain::entities::query_period::*;
        pub use crate::domain::entities::report_sink::*;
    }

    pub mod logic {
        pub use crate::domain::logic::aggregator::aggregate;
        pub use crate::domain::logic::payment_text_parser::PaymentTextParser;
    }

    pub mod usecases {
        pub use crate::domain::usecases::clear_payments_usecase::ClearPaymentsUsecase;
        pub use crate::domain::usecases::ingest_payment_usecase::IngestPaymentUsecase;
        pub use crate::domain::usecases::summarize_payments_usecase::SummarizePaymentsUsecase;
    }

    pub mod commands {
        pub use crate::presentation::command::Command;
    }

    pub mod report {
        pub use crate::presentation::summary_fmt::{format_summary, period_label};
    }
}
