use fractic_server_error::ServerError;

use crate::{
    data::models::tax_calendar_entry_model::TaxCalendarEntryModel,
    entities::TaxCalendarEntry,
    errors::InvalidJson,
};

/// Body of `GET /api/tax-calendar`: `[{"taxType", "dueDay", "description"}]`.
pub(crate) trait TaxCalendarJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TaxCalendarEntry>, ServerError>;
}

pub(crate) struct TaxCalendarJsonDatasourceImpl;

impl TaxCalendarJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TaxCalendarJsonDatasource for TaxCalendarJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TaxCalendarEntry>, ServerError> {
        let models: Vec<TaxCalendarEntryModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("TaxCalendar", &e))?;
        models.into_iter().map(TryInto::try_into).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::TaxType;

    use super::*;

    #[test]
    fn parses_api_response() {
        let json = r#"[
            {"taxType": "DAS", "dueDay": 20, "description": "Simples"},
            {"taxType": "ISS_RETIDO", "dueDay": null}
        ]"#;
        let entries = TaxCalendarJsonDatasourceImpl::new().from_string(json).unwrap();
        assert_eq!(entries[0].tax_type, TaxType::from("DAS"));
        assert_eq!(entries[0].due_day, Some(20));
        assert_eq!(entries[1].due_day, None);
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(TaxCalendarJsonDatasourceImpl::new()
            .from_string(r#"{"taxType": "DAS"}"#)
            .is_err());
    }

    #[test]
    fn rejects_due_days_outside_the_month() {
        let datasource = TaxCalendarJsonDatasourceImpl::new();
        assert!(datasource
            .from_string(r#"[{"taxType": "DAS", "dueDay": 0}]"#)
            .is_err());
        assert!(datasource
            .from_string(r#"[{"taxType": "DAS", "dueDay": 32}]"#)
            .is_err());
        assert!(datasource
            .from_string(r#"[{"taxType": "DAS", "dueDay": 31}]"#)
            .is_ok());
    }
}
