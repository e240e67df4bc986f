use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{
    data::models::competence_period_model::{CompetencePeriodModel, ReferenceMonthModel},
    errors::ValidationError,
};

/// Reporting period an obligation covers. Externally written as "MM/YYYY"
/// (competence) or "YYYY-MM" (obligation reference month).
///
/// The month is always in 1..=12. The year is not range-checked here; the
/// due-date resolver decides what to do with implausible years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompetencePeriod {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl CompetencePeriod {
    pub fn new(month: u32, year: i32) -> Result<Self, ServerError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::new(
                "competenceMonth",
                &format!("{} is not a month (expected 1-12)", month),
            ));
        }
        Ok(Self { year, month })
    }

    /// Parses the "YYYY-MM" form stored on obligations.
    pub fn from_reference_month(s: &str) -> Result<Self, ServerError> {
        Ok(ReferenceMonthModel::from_str(s)?.into())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// `None` when the year would overflow.
    pub fn next(&self) -> Option<CompetencePeriod> {
        if self.month == 12 {
            Some(CompetencePeriod {
                year: self.year.checked_add(1)?,
                month: 1,
            })
        } else {
            Some(CompetencePeriod {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// `None` when the year would underflow.
    pub fn previous(&self) -> Option<CompetencePeriod> {
        if self.month == 1 {
            Some(CompetencePeriod {
                year: self.year.checked_sub(1)?,
                month: 12,
            })
        } else {
            Some(CompetencePeriod {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    /// "YYYY-MM", as stored on obligations.
    pub fn reference_month(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// "MM/YYYY".
impl std::fmt::Display for CompetencePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Parses "MM/YYYY".
impl FromStr for CompetencePeriod {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CompetencePeriodModel::from_str(s)?.into())
    }
}
