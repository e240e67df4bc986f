use chrono::NaiveDate;

use super::{
    analytics::{MonthlyTaxTotal, TaxVariance},
    company_profile::CompanyTaxProfile,
    competence_period::CompetencePeriod,
    compliance_matrix::{ComplianceMatrix, ControlOverview},
    obligation::{CompanyId, Obligation},
    tax_calendar::{TaxCalendar, TaxCalendarEntry},
    tax_type::TaxType,
};

/// Everything loaded from the persistence exports for a control run.
pub struct ControlRecordSpecs {
    pub calendar_entries: Vec<TaxCalendarEntry>,
    pub obligations: Vec<Obligation>,
    pub profiles: Vec<CompanyTaxProfile>,
}

/// Raw tax calendar export, in either of the formats the backend produces.
#[derive(Debug, Clone, Copy)]
pub enum TaxCalendarExport<'a> {
    Csv(&'a str),
    Json(&'a str),
}

/// Obligation that should exist for the period but has not been created yet,
/// with the due date it would be created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedObligation {
    pub company_id: CompanyId,
    pub tax_type: TaxType,
    pub reference_month: CompetencePeriod,
    pub due_date: NaiveDate,
}

/// Everything the monthly control dashboard shows for one period.
#[derive(Debug, Clone)]
pub struct MonthlyControl {
    pub calendar: TaxCalendar,
    pub matrix: ComplianceMatrix,
    pub overview: ControlOverview,
    pub planned: Vec<PlannedObligation>,
    pub monthly_totals: Vec<MonthlyTaxTotal>,
    pub variances: Vec<TaxVariance>,
}
