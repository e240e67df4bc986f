// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod company_profiles_csv_datasource;
        pub(crate) mod obligations_csv_datasource;
        pub(crate) mod tax_calendar_csv_datasource;
        pub(crate) mod tax_calendar_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod competence_period_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod obligation_status_model;
        pub(crate) mod tax_calendar_entry_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod control_records_repository_impl;
        pub(crate) mod tax_calendar_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod analytics;
        pub(crate) mod company_profile;
        pub(crate) mod competence_period;
        pub(crate) mod completion_summary;
        pub(crate) mod compliance_matrix;
        pub(crate) mod control_records;
        pub(crate) mod display_status;
        pub(crate) mod obligation;
        pub(crate) mod role;
        pub(crate) mod tax_calendar;
        pub(crate) mod tax_type;
    }
    pub(crate) mod logic {
        pub(crate) mod authorization;
        pub(crate) mod completion_aggregator;
        pub(crate) mod due_date_resolver;
        pub(crate) mod matrix_builder;
        pub(crate) mod status_classifier;
        pub(crate) mod tax_analytics;
        pub(crate) mod tax_calendar_store;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod control_records_repository;
        pub(crate) mod tax_calendar_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod control_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod control_report_printer;
    pub(crate) mod matrix_csv_printer;
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
        pub use crate::domain::entities::analytics::*;
        pub use crate::domain::entities::company_profile::*;
        pub use crate::domain::entities::competence_period::*;
        pub use crate::domain::entities::completion_summary::*;
        pub use crate::domain::entities::compliance_matrix::*;
        pub use crate::domain::entities::control_records::*;
        pub use crate::domain::entities::display_status::*;
        pub use crate::domain::entities::obligation::*;
        pub use crate::domain::entities::role::*;
        pub use crate::domain::entities::tax_calendar::*;
        pub use crate::domain::entities::tax_type::*;
    }

    pub mod rules {
        pub use crate::domain::logic::authorization::{has_capability, require_capability};
        pub use crate::domain::logic::completion_aggregator::aggregate;
        pub use crate::domain::logic::due_date_resolver::DueDateResolver;
        pub use crate::domain::logic::status_classifier::{classify, classify_badge, is_overdue};
        pub use crate::domain::logic::tax_analytics::{monthly_totals, variance};
        pub use crate::domain::logic::tax_calendar_store::TaxCalendarStore;
    }

    pub mod repositories {
        pub use crate::data::repositories::tax_calendar_repository_impl::InMemoryTaxCalendarRepository;
        pub use crate::domain::repositories::tax_calendar_repository::TaxCalendarRepository;
    }
}
