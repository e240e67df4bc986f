use fractic_server_error::ServerError;

use crate::{entities::ComplianceMatrix, errors::InvalidCsv};

/// CSV export of the company × tax matrix: one column per tax type with the
/// cell's label, plus the completion percentage.
pub(crate) struct MatrixCsvPrinter;

impl MatrixCsvPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print(&self, matrix: &ComplianceMatrix) -> Result<String, ServerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let header = std::iter::once("Empresa".to_string())
            .chain(matrix.tax_types.iter().map(|t| t.to_string()))
            .chain(std::iter::once("Concluído (%)".to_string()));
        writer
            .write_record(header)
            .map_err(|e| InvalidCsv::with_debug(&e))?;

        for row in &matrix.rows {
            let record = std::iter::once(row.company_id.to_string())
                .chain(row.cells.iter().map(|c| c.label().to_string()))
                .chain(std::iter::once(format!("{:.1}", row.summary.completion_pct())));
            writer
                .write_record(record)
                .map_err(|e| InvalidCsv::with_debug(&e))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| InvalidCsv::with_debug(e.error()))?;
        String::from_utf8(bytes).map_err(|e| InvalidCsv::with_debug(&e))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::logic::{
            matrix_builder::ComplianceMatrixBuilder, status_classifier::tests::obligation,
        },
        entities::{company, CompanyTaxProfile, CompetencePeriod, KnownTaxType, ObligationStatus},
        ext::standard_taxes::{DAS, FGTS},
    };

    use super::*;

    #[test]
    fn prints_header_and_labels() {
        let period = CompetencePeriod::new(1, 2025).unwrap();
        let catalog = vec![
            KnownTaxType {
                code: DAS.clone(),
                description: String::new(),
            },
            KnownTaxType {
                code: FGTS.clone(),
                description: String::new(),
            },
        ];
        let profiles = vec![CompanyTaxProfile {
            company_id: company("acme"),
            expected_taxes: [DAS.clone(), FGTS.clone()].into(),
        }];
        let obligations = vec![obligation("acme", &DAS, ObligationStatus::NotApplicable, false)];
        let matrix = ComplianceMatrixBuilder::new(period, &profiles, &obligations, &catalog).build();

        let csv = MatrixCsvPrinter::new().print(&matrix).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Empresa,DAS,FGTS,Concluído (%)");
        assert_eq!(lines[1], "acme,Não Aplicável,Falta Criar,50.0");
    }
}
