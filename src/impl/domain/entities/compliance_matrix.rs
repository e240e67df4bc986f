use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::{
    competence_period::CompetencePeriod, completion_summary::CompletionSummary,
    display_status::DisplayStatus, obligation::CompanyId, tax_type::TaxType,
};

#[derive(Debug, Clone)]
pub struct MatrixRow {
    pub company_id: CompanyId,
    pub expected_taxes: BTreeSet<TaxType>,
    /// One cell per entry of `ComplianceMatrix::tax_types`, same order.
    pub cells: Vec<DisplayStatus>,
    pub summary: CompletionSummary,
}

/// Company × tax grid for one competence period.
#[derive(Debug, Clone)]
pub struct ComplianceMatrix {
    pub period: CompetencePeriod,
    pub tax_types: Vec<TaxType>,
    pub rows: Vec<MatrixRow>,
}

impl ComplianceMatrix {
    pub fn cell(&self, company_id: &CompanyId, tax_type: &TaxType) -> Option<DisplayStatus> {
        let column = self.tax_types.iter().position(|t| t == tax_type)?;
        self.rows
            .iter()
            .find(|r| &r.company_id == company_id)
            .and_then(|r| r.cells.get(column).copied())
    }
}

/// Firm-wide totals for the monthly control dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlOverview {
    pub period: CompetencePeriod,
    pub as_of: NaiveDate,
    pub companies: usize,
    pub fully_compliant: usize,
    pub posted: usize,
    pub pending: usize,
    pub not_applicable: usize,
    pub missing: usize,
    pub overdue: usize,
    pub average_completion_rate: f64,
}
