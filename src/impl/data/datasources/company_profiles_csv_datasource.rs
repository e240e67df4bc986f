use std::collections::BTreeSet;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    entities::{CompanyId, CompanyTaxProfile, TaxType},
    errors::{InvalidCsv, InvalidCsvContent, InvalidRon},
};

/// Company configuration export: `company_id,expected_taxes`, where
/// `expected_taxes` is a RON list such as `["DAS", "FGTS"]`.
pub(crate) trait CompanyProfilesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<CompanyTaxProfile>, ServerError>;
}

pub(crate) struct CompanyProfilesCsvDatasourceImpl;

impl CompanyProfilesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl CompanyProfilesCsvDatasource for CompanyProfilesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<CompanyTaxProfile>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_company_id = r.get(0).unwrap_or("").trim();
                    let raw_expected_taxes = match r.get(1).map(str::trim) {
                        Some(s) if !s.is_empty() => s,
                        _ => "[]",
                    };

                    // Parse.
                    if raw_company_id.is_empty() {
                        return Err(InvalidCsvContent::new("company profile without company_id"));
                    }
                    let expected_taxes: Vec<String> = from_str(raw_expected_taxes)
                        .map_err(|e| InvalidRon::with_debug("ExpectedTaxes", &e))?;

                    // Build.
                    Ok(CompanyTaxProfile {
                        company_id: CompanyId(raw_company_id.to_string()),
                        expected_taxes: expected_taxes
                            .iter()
                            .map(|t| TaxType::from(t.as_str()))
                            .collect::<BTreeSet<_>>(),
                    })
                })
            })
            .collect()
    }
}
