use chrono::NaiveDate;

use super::{competence_period::CompetencePeriod, tax_type::TaxType};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ObligationId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct CompanyId(pub(crate) String);

pub fn company(id: impl Into<String>) -> CompanyId {
    CompanyId(id.into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObligationStatus {
    Pending,
    Submitted,
    Paid,
    NotApplicable,
    /// Raw status outside the known set, kept as-is.
    Other(String),
}

#[derive(Debug, Clone)]
pub struct Obligation {
    pub id: ObligationId,
    pub company_id: CompanyId,
    pub tax_type: TaxType,
    pub reference_month: CompetencePeriod,
    pub due_date: NaiveDate,
    pub amount: Option<f64>,
    pub status: ObligationStatus,
    pub has_file: bool,
    pub not_applicable_reason: Option<String>,
}

// --

impl ObligationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CompanyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObligationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ObligationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObligationStatus::Pending => write!(f, "PENDING"),
            ObligationStatus::Submitted => write!(f, "SUBMITTED"),
            ObligationStatus::Paid => write!(f, "PAID"),
            ObligationStatus::NotApplicable => write!(f, "NOT_APPLICABLE"),
            ObligationStatus::Other(s) => write!(f, "{}", s),
        }
    }
}
