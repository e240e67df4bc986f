use fractic_server_error::ServerError;

use crate::entities::{TaxCalendarEntry, TaxType};

/// Row of the `GET /api/tax-calendar` response.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaxCalendarEntryModel {
    pub tax_type: String,
    #[serde(default)]
    pub due_day: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<TaxCalendarEntryModel> for TaxCalendarEntry {
    type Error = ServerError;
    fn try_from(model: TaxCalendarEntryModel) -> Result<Self, Self::Error> {
        Ok(TaxCalendarEntry {
            tax_type: TaxType::from(model.tax_type.as_str()),
            due_day: model
                .due_day
                .map(TaxCalendarEntry::check_due_day)
                .transpose()?,
            description: model.description.unwrap_or_default(),
        })
    }
}
