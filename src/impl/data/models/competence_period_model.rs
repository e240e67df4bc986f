use std::{str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    entities::CompetencePeriod,
    errors::{InvalidCompetencePeriod, InvalidReferenceMonth},
};

static COMPETENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{4})$").expect("hardcoded regex should be valid")
});
static REFERENCE_MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})$").expect("hardcoded regex should be valid")
});

/// "MM/YYYY".
#[derive(Debug)]
pub(crate) struct CompetencePeriodModel(CompetencePeriod);

/// "YYYY-MM".
#[derive(Debug)]
pub(crate) struct ReferenceMonthModel(CompetencePeriod);

fn build(year: &str, month: &str) -> Option<CompetencePeriod> {
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    (1..=12)
        .contains(&month)
        .then_some(CompetencePeriod { year, month })
}

impl FromStr for CompetencePeriodModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COMPETENCE_PATTERN
            .captures(s.trim())
            .and_then(|caps| build(&caps[2], &caps[1]))
            .map(CompetencePeriodModel)
            .ok_or_else(|| InvalidCompetencePeriod::new(s))
    }
}

impl FromStr for ReferenceMonthModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REFERENCE_MONTH_PATTERN
            .captures(s.trim())
            .and_then(|caps| build(&caps[1], &caps[2]))
            .map(ReferenceMonthModel)
            .ok_or_else(|| InvalidReferenceMonth::new(s))
    }
}

impl Into<CompetencePeriod> for CompetencePeriodModel {
    fn into(self) -> CompetencePeriod {
        self.0
    }
}

impl Into<CompetencePeriod> for ReferenceMonthModel {
    fn into(self) -> CompetencePeriod {
        self.0
    }
}
