use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        company_profiles_csv_datasource::{
            CompanyProfilesCsvDatasource, CompanyProfilesCsvDatasourceImpl,
        },
        obligations_csv_datasource::{ObligationsCsvDatasource, ObligationsCsvDatasourceImpl},
        tax_calendar_csv_datasource::{TaxCalendarCsvDatasource, TaxCalendarCsvDatasourceImpl},
        tax_calendar_json_datasource::{
            TaxCalendarJsonDatasource, TaxCalendarJsonDatasourceImpl,
        },
    },
    domain::repositories::control_records_repository::ControlRecordsRepository,
    entities::{ControlRecordSpecs, TaxCalendarExport},
    errors::ReadError,
};

pub(crate) struct ControlRecordsRepositoryImpl<
    DS1 = TaxCalendarCsvDatasourceImpl,
    DS2 = TaxCalendarJsonDatasourceImpl,
    DS3 = ObligationsCsvDatasourceImpl,
    DS4 = CompanyProfilesCsvDatasourceImpl,
> where
    DS1: TaxCalendarCsvDatasource,
    DS2: TaxCalendarJsonDatasource,
    DS3: ObligationsCsvDatasource,
    DS4: CompanyProfilesCsvDatasource,
{
    calendar_csv_datasource: DS1,
    calendar_json_datasource: DS2,
    obligations_datasource: DS3,
    profiles_datasource: DS4,
}

#[async_trait]
impl<DS1, DS2, DS3, DS4> ControlRecordsRepository for ControlRecordsRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: TaxCalendarCsvDatasource,
    DS2: TaxCalendarJsonDatasource,
    DS3: ObligationsCsvDatasource,
    DS4: CompanyProfilesCsvDatasource,
{
    fn from_string(
        &self,
        calendar: TaxCalendarExport<'_>,
        obligations_csv: &str,
        profiles_csv: &str,
    ) -> Result<ControlRecordSpecs, ServerError> {
        let calendar_entries = match calendar {
            TaxCalendarExport::Csv(s) => self.calendar_csv_datasource.from_string(s)?,
            TaxCalendarExport::Json(s) => self.calendar_json_datasource.from_string(s)?,
        };
        let specs = ControlRecordSpecs {
            calendar_entries,
            obligations: self.obligations_datasource.from_string(obligations_csv)?,
            profiles: self.profiles_datasource.from_string(profiles_csv)?,
        };
        tracing::debug!(
            calendar_entries = specs.calendar_entries.len(),
            obligations = specs.obligations.len(),
            profiles = specs.profiles.len(),
            "loaded control records"
        );
        Ok(specs)
    }

    async fn from_file<P>(
        &self,
        calendar: P,
        obligations_csv: P,
        profiles_csv: P,
    ) -> Result<ControlRecordSpecs, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let is_json = calendar
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let (calendar_raw, obligations_raw, profiles_raw) = futures::try_join!(
            read(calendar.as_ref()),
            read(obligations_csv.as_ref()),
            read(profiles_csv.as_ref()),
        )?;
        let calendar = if is_json {
            TaxCalendarExport::Json(&calendar_raw)
        } else {
            TaxCalendarExport::Csv(&calendar_raw)
        };
        self.from_string(calendar, &obligations_raw, &profiles_raw)
    }
}

async fn read(path: &std::path::Path) -> Result<String, ServerError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}

impl ControlRecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        ControlRecordsRepositoryImpl {
            calendar_csv_datasource: TaxCalendarCsvDatasourceImpl::new(),
            calendar_json_datasource: TaxCalendarJsonDatasourceImpl::new(),
            obligations_datasource: ObligationsCsvDatasourceImpl::new(),
            profiles_datasource: CompanyProfilesCsvDatasourceImpl::new(),
        }
    }
}
