use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    config::SgotConfig,
    data::repositories::{
        control_records_repository_impl::ControlRecordsRepositoryImpl,
        tax_calendar_repository_impl::InMemoryTaxCalendarRepository,
    },
    domain::{
        logic::{
            due_date_resolver::DueDateResolver,
            matrix_builder::{control_overview, ComplianceMatrixBuilder},
            tax_analytics::{monthly_totals, variance},
            tax_calendar_store::TaxCalendarStore,
        },
        repositories::control_records_repository::ControlRecordsRepository,
    },
    entities::{
        CompetencePeriod, ControlRecordSpecs, MonthlyControl, PlannedObligation,
        TaxCalendarExport,
    },
};

#[async_trait]
pub trait ControlUsecase: Send + Sync {
    fn from_string(
        &self,
        calendar: TaxCalendarExport<'_>,
        obligations_csv: &str,
        profiles_csv: &str,
        period: CompetencePeriod,
        today: NaiveDate,
    ) -> Result<MonthlyControl, ServerError>;

    async fn from_file<P>(
        &self,
        calendar: P,
        obligations_csv: P,
        profiles_csv: P,
        period: CompetencePeriod,
        today: NaiveDate,
    ) -> Result<MonthlyControl, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ControlUsecaseImpl<
    R1 = ControlRecordsRepositoryImpl, // Default.
> where
    R1: ControlRecordsRepository,
{
    records_repository: R1,
    config: SgotConfig,
}

#[async_trait]
impl<R1> ControlUsecase for ControlUsecaseImpl<R1>
where
    R1: ControlRecordsRepository,
{
    fn from_string(
        &self,
        calendar: TaxCalendarExport<'_>,
        obligations_csv: &str,
        profiles_csv: &str,
        period: CompetencePeriod,
        today: NaiveDate,
    ) -> Result<MonthlyControl, ServerError> {
        let specs = self
            .records_repository
            .from_string(calendar, obligations_csv, profiles_csv)?;
        self.process(specs, period, today)
    }

    async fn from_file<P>(
        &self,
        calendar: P,
        obligations_csv: P,
        profiles_csv: P,
        period: CompetencePeriod,
        today: NaiveDate,
    ) -> Result<MonthlyControl, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let specs = self
            .records_repository
            .from_file(calendar, obligations_csv, profiles_csv)
            .await?;
        self.process(specs, period, today)
    }
}

impl ControlUsecaseImpl {
    pub(crate) fn new(config: SgotConfig) -> Self {
        ControlUsecaseImpl {
            records_repository: ControlRecordsRepositoryImpl::new(),
            config,
        }
    }
}

impl<R1: ControlRecordsRepository> ControlUsecaseImpl<R1> {
    fn process(
        &self,
        specs: ControlRecordSpecs,
        period: CompetencePeriod,
        today: NaiveDate,
    ) -> Result<MonthlyControl, ServerError> {
        let ControlRecordSpecs {
            calendar_entries,
            obligations,
            profiles,
        } = specs;

        let store = TaxCalendarStore::with_repository(
            InMemoryTaxCalendarRepository::seeded(calendar_entries),
            self.config.known_tax_types.clone(),
        );
        let calendar = store.load()?;

        let matrix =
            ComplianceMatrixBuilder::new(period, &profiles, &obligations, store.catalog()).build();
        let overview = control_overview(&matrix, &obligations, today);

        let resolver = DueDateResolver::new(&self.config);
        let planned = matrix
            .rows
            .iter()
            .flat_map(|row| {
                row.summary
                    .missing_taxes
                    .iter()
                    .map(move |tax| (&row.company_id, tax))
            })
            .map(|(company_id, tax)| {
                Ok(PlannedObligation {
                    company_id: company_id.clone(),
                    tax_type: tax.clone(),
                    reference_month: period,
                    due_date: resolver.resolve_for(&period, tax, &calendar)?,
                })
            })
            .collect::<Result<Vec<_>, ServerError>>()?;

        let monthly_totals = monthly_totals(&obligations);
        let variances = variance(&monthly_totals, period);

        tracing::info!(
            period = %period,
            companies = overview.companies,
            missing = overview.missing,
            overdue = overview.overdue,
            "monthly control computed"
        );

        Ok(MonthlyControl {
            calendar,
            matrix,
            overview,
            planned,
            monthly_totals,
            variances,
        })
    }
}
