use super::{competence_period::CompetencePeriod, tax_type::TaxType};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTaxTotal {
    pub period: CompetencePeriod,
    pub tax_type: TaxType,
    pub total: f64,
    /// Number of obligations with a non-null amount that contributed.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxVariance {
    pub tax_type: TaxType,
    pub period: CompetencePeriod,
    pub previous_total: Option<f64>,
    pub current_total: f64,
    /// Percentage change against the previous period. `None` when there is
    /// nothing to compare against (no previous total, or a zero one).
    pub variance_pct: Option<f64>,
}
