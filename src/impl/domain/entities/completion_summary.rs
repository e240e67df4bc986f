use super::{obligation::CompanyId, tax_type::TaxType};

/// Per-company completion statistics for one period. Derived on every query,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSummary {
    pub company_id: CompanyId,
    pub posted: usize,
    pub pending: usize,
    pub not_applicable: usize,
    pub missing: usize,
    pub missing_taxes: Vec<TaxType>,
    /// Fraction in [0, 1]. "Not applicable" counts as fulfilled.
    pub completion_rate: f64,
}

impl CompletionSummary {
    pub fn completion_pct(&self) -> f64 {
        self.completion_rate * 100.0
    }
}
