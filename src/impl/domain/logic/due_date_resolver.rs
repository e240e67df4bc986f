use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    config::{FallbackDueDatePolicy, SgotConfig},
    entities::{CompetencePeriod, TaxCalendar, TaxType},
    errors::ValidationError,
};

use super::utils::{clamped_date, following_month, last_day_of_month, normalize_month};

/// Computes the calendar due date of an obligation from its competence period
/// and the configured due day of its tax type.
///
/// Taxes are due in the month following competence: competence 12/2025 with
/// due day 20 is due on 2026-01-20. A due day past the end of the due month
/// is clamped to its last day.
#[derive(Debug, Clone)]
pub struct DueDateResolver {
    policy: FallbackDueDatePolicy,
    min_year: i32,
    max_year: i32,
}

impl Default for DueDateResolver {
    fn default() -> Self {
        Self::new(&SgotConfig::default())
    }
}

impl DueDateResolver {
    pub fn new(config: &SgotConfig) -> Self {
        Self {
            policy: config.due_date_policy,
            min_year: config.min_year,
            max_year: config.max_year,
        }
    }

    pub fn resolve(
        &self,
        competence_month: u32,
        competence_year: i32,
        due_day: u32,
    ) -> Result<NaiveDate, ServerError> {
        if !self.is_plausible(competence_month, competence_year) {
            return self.fallback(competence_month, competence_year);
        }
        let (due_year, due_month) = following_month(competence_year, competence_month)?;
        clamped_date(due_year, due_month, due_day)
    }

    /// Resolves using the due day configured in `calendar`. A tax type with
    /// no configured due day falls due on the last day of the following
    /// month.
    pub fn resolve_for(
        &self,
        period: &CompetencePeriod,
        tax_type: &TaxType,
        calendar: &TaxCalendar,
    ) -> Result<NaiveDate, ServerError> {
        match calendar.due_day(tax_type) {
            Some(due_day) => self.resolve(period.month(), period.year(), due_day),
            None => {
                tracing::debug!(
                    tax_type = %tax_type,
                    period = %period,
                    "no due day configured; using end of following month"
                );
                if !self.is_plausible(period.month(), period.year()) {
                    return self.fallback(period.month(), period.year());
                }
                let (due_year, due_month) = following_month(period.year(), period.month())?;
                last_day_of_month(due_year, due_month)
            }
        }
    }

    fn is_plausible(&self, month: u32, year: i32) -> bool {
        (1..=12).contains(&month) && (self.min_year..=self.max_year).contains(&year)
    }

    fn fallback(&self, month: u32, year: i32) -> Result<NaiveDate, ServerError> {
        match self.policy {
            FallbackDueDatePolicy::Reject => Err(ValidationError::new(
                "competencePeriod",
                &format!(
                    "{:02}/{} is outside the accepted range (months 1-12, years {}-{})",
                    month, year, self.min_year, self.max_year
                ),
            )),
            FallbackDueDatePolicy::FallbackToMonthEnd => {
                tracing::warn!(
                    month,
                    year,
                    "implausible competence period; due date falls back to end of following month"
                );
                let (year, month) = normalize_month(year, i64::from(month))?;
                let (due_year, due_month) = following_month(year, month)?;
                last_day_of_month(due_year, due_month)
            }
        }
    }
}
