use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    config::SgotConfig,
    domain::usecases::control_usecase::{ControlUsecase as _, ControlUsecaseImpl},
    entities::{CompetencePeriod, MonthlyControl, TaxCalendarExport},
    presentation::{
        control_report_printer::ControlReportPrinter, matrix_csv_printer::MatrixCsvPrinter,
    },
};

/// CSV export of the compliance matrix.
pub type MatrixCsv = String;
/// Plain-text monthly control report.
pub type ControlReport = String;

/// Entry point for running the monthly control over exported records.
pub struct SgotControlUtil {
    control_usecase: ControlUsecaseImpl,
    matrix_printer: MatrixCsvPrinter,
    report_printer: ControlReportPrinter,
}

impl Default for SgotControlUtil {
    fn default() -> Self {
        Self::new(SgotConfig::default())
    }
}

impl SgotControlUtil {
    pub fn new(config: SgotConfig) -> Self {
        Self {
            control_usecase: ControlUsecaseImpl::new(config),
            matrix_printer: MatrixCsvPrinter::new(),
            report_printer: ControlReportPrinter::new(),
        }
    }

    pub fn from_string(
        &self,
        calendar: TaxCalendarExport<'_>,
        obligations_csv: &str,
        profiles_csv: &str,
        period: CompetencePeriod,
        today: NaiveDate,
    ) -> Result<(MonthlyControl, MatrixCsv, ControlReport), ServerError> {
        let control = self.control_usecase.from_string(
            calendar,
            obligations_csv,
            profiles_csv,
            period,
            today,
        )?;
        self.render(control)
    }

    pub async fn from_file<T>(
        &self,
        calendar: T,
        obligations_csv: T,
        profiles_csv: T,
        period: CompetencePeriod,
        today: NaiveDate,
    ) -> Result<(MonthlyControl, MatrixCsv, ControlReport), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let control = self
            .control_usecase
            .from_file(calendar, obligations_csv, profiles_csv, period, today)
            .await?;
        self.render(control)
    }

    fn render(
        &self,
        control: MonthlyControl,
    ) -> Result<(MonthlyControl, MatrixCsv, ControlReport), ServerError> {
        let matrix_csv = self.matrix_printer.print(&control.matrix)?;
        let report = self.report_printer.print(&control);
        Ok((control, matrix_csv, report))
    }
}
