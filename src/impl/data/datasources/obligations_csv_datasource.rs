use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::{
        amount_model::AmountModel,
        competence_period_model::ReferenceMonthModel,
        iso_date_model::ISODateModel,
        obligation_status_model::{FlagModel, ObligationStatusModel},
    },
    entities::{CompanyId, Obligation, ObligationId, TaxType},
    errors::{InvalidCsv, InvalidCsvContent},
};

/// Obligations export, with header row:
/// `id,company_id,tax_type,reference_month,due_date,amount,status,has_file,not_applicable_reason`.
pub(crate) trait ObligationsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Obligation>, ServerError>;
}

pub(crate) struct ObligationsCsvDatasourceImpl;

impl ObligationsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ObligationsCsvDatasource for ObligationsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Obligation>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("").trim();
                    let raw_company_id = r.get(1).unwrap_or("").trim();
                    let raw_tax_type = r.get(2).unwrap_or("").trim();
                    let raw_reference_month = r.get(3).unwrap_or("");
                    let raw_due_date = r.get(4).unwrap_or("");
                    let raw_amount = r.get(5).unwrap_or("");
                    let raw_status = r.get(6).unwrap_or("");
                    let raw_has_file = r.get(7).unwrap_or("");
                    let raw_reason = match r.get(8).map(str::trim) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    if raw_company_id.is_empty() || raw_tax_type.is_empty() {
                        return Err(InvalidCsvContent::new(&format!(
                            "obligation on line {} lacks company_id or tax_type",
                            i + 2
                        )));
                    }
                    let reference_month = ReferenceMonthModel::from_str(raw_reference_month)?;
                    let due_date = ISODateModel::from_str(raw_due_date)?;
                    let amount = AmountModel::from_str(raw_amount)?;
                    let status = ObligationStatusModel::from_str(raw_status)?;
                    let has_file = FlagModel::from_str(raw_has_file)?;

                    // Build.
                    Ok(Obligation {
                        // Rows exported without an id are numbered by position.
                        id: ObligationId(if raw_id.is_empty() {
                            format!("row-{}", i)
                        } else {
                            raw_id.to_string()
                        }),
                        company_id: CompanyId(raw_company_id.to_string()),
                        tax_type: TaxType::from(raw_tax_type),
                        reference_month: reference_month.into(),
                        due_date: due_date.into(),
                        amount: amount.into(),
                        status: status.into(),
                        has_file: has_file.0,
                        not_applicable_reason: raw_reason.map(str::to_string),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::entities::{CompetencePeriod, ObligationStatus};

    use super::*;

    const HEADER: &str =
        "id,company_id,tax_type,reference_month,due_date,amount,status,has_file,not_applicable_reason\n";

    #[test]
    fn parses_rows() {
        let csv = format!(
            "{}{}{}",
            HEADER,
            "o1,acme,DAS,2025-01,2025-02-20,\"1.234,56\",PAID,true,\n",
            ",acme,FGTS,2025-01,2025-02-07,,NOT_APPLICABLE,false,Sem funcionários\n",
        );
        let obligations = ObligationsCsvDatasourceImpl::new().from_string(&csv).unwrap();
        assert_eq!(obligations.len(), 2);

        let das = &obligations[0];
        assert_eq!(das.id.as_str(), "o1");
        assert_eq!(das.company_id.as_str(), "acme");
        assert_eq!(das.reference_month, CompetencePeriod::new(1, 2025).unwrap());
        assert_eq!(das.due_date, NaiveDate::from_ymd_opt(2025, 2, 20).unwrap());
        assert_eq!(das.amount, Some(1234.56));
        assert_eq!(das.status, ObligationStatus::Paid);
        assert!(das.has_file);

        let fgts = &obligations[1];
        assert_eq!(fgts.id.as_str(), "row-1");
        assert_eq!(fgts.amount, None);
        assert_eq!(fgts.not_applicable_reason.as_deref(), Some("Sem funcionários"));
    }

    #[test]
    fn rejects_bad_reference_month() {
        let csv = format!("{}o1,acme,DAS,01/2025,2025-02-20,,PENDING,false,\n", HEADER);
        assert!(ObligationsCsvDatasourceImpl::new().from_string(&csv).is_err());
    }

    #[test]
    fn rejects_missing_company() {
        let csv = format!("{}o1,,DAS,2025-01,2025-02-20,,PENDING,false,\n", HEADER);
        assert!(ObligationsCsvDatasourceImpl::new().from_string(&csv).is_err());
    }
}
