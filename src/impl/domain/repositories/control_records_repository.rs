use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{ControlRecordSpecs, TaxCalendarExport};

#[async_trait]
pub trait ControlRecordsRepository: Send + Sync {
    fn from_string(
        &self,
        calendar: TaxCalendarExport<'_>,
        obligations_csv: &str,
        profiles_csv: &str,
    ) -> Result<ControlRecordSpecs, ServerError>;

    /// The calendar file is read as JSON when its extension is `.json`, and
    /// as CSV otherwise.
    async fn from_file<P>(
        &self,
        calendar: P,
        obligations_csv: P,
        profiles_csv: P,
    ) -> Result<ControlRecordSpecs, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
