// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod config_ron_datasource;
        pub(crate) mod records_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod company_model;
        pub(crate) mod invoice_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod receipt_model;
        pub(crate) mod records_snapshot_model;
        pub(crate) mod tracker_config_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod alert;
        pub(crate) mod company;
        pub(crate) mod filters;
        pub(crate) mod invoice;
        pub(crate) mod receipt;
        pub(crate) mod records;
        pub(crate) mod report_period;
        pub(crate) mod stats;
        pub(crate) mod status;
        pub(crate) mod tracker_config;
    }
    pub(crate) mod logic {
        pub(crate) mod alert_engine;
        pub(crate) mod filters_impl;
        pub(crate) mod receipt_impl;
        pub(crate) mod report_aggregator;
        pub(crate) mod report_period_impl;
        pub(crate) mod status_engine;
        pub(crate) mod tracker_config_impl;
        pub(crate) mod validation;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod dashboard_usecase;
        pub(crate) mod records_usecase;
        pub(crate) mod report_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_exporter;
    pub(crate) mod report_printer;
    pub(crate) mod status_fmt;
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
        pub use crate::domain::entities::alert::*;
        pub use crate::domain::entities::company::*;
        pub use crate::domain::entities::filters::*;
        pub use crate::domain::entities::invoice::*;
        pub use crate::domain::entities::receipt::*;
        pub use crate::domain::entities::records::*;
        pub use crate::domain::entities::report_period::*;
        pub use crate::domain::entities::stats::*;
        pub use crate::domain::entities::status::*;
        pub use crate::domain::entities::tracker_config::*;
    }

    pub mod logic {
        pub use crate::domain::logic::alert_engine::{compute_alerts, AlertEngine};
        pub use crate::domain::logic::report_aggregator::ReportAggregator;
        pub use crate::domain::logic::status_engine::{
            days_remaining, derive_status, display_tier, StatusEngine,
        };
        pub use crate::domain::logic::validation::tax_for_amount;
        pub use crate::presentation::status_fmt::days_text;
    }

    pub mod repositories {
        pub use crate::data::repositories::records_repository_impl::InMemoryRecordsRepository;
        pub use crate::domain::repositories::records_repository::RecordsRepository;
    }

    pub mod usecases {
        pub use crate::domain::usecases::dashboard_usecase::DashboardUsecase;
        pub use crate::domain::usecases::records_usecase::RecordsUsecase;
        pub use crate::domain::usecases::report_usecase::ReportUsecase;
    }
}
