use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::entities::{
    CompanyTaxProfile, CompetencePeriod, ComplianceMatrix, ControlOverview, DisplayStatus,
    KnownTaxType, MatrixRow, Obligation, TaxType,
};

use super::{
    completion_aggregator::aggregate,
    status_classifier::{classify, is_overdue},
};

pub(crate) struct ComplianceMatrixBuilder<'a> {
    period: CompetencePeriod,
    profiles: &'a [CompanyTaxProfile],
    obligations: &'a [Obligation],
    catalog: &'a [KnownTaxType],
}

impl<'a> ComplianceMatrixBuilder<'a> {
    pub(crate) fn new(
        period: CompetencePeriod,
        profiles: &'a [CompanyTaxProfile],
        obligations: &'a [Obligation],
        catalog: &'a [KnownTaxType],
    ) -> Self {
        Self {
            period,
            profiles,
            obligations,
            catalog,
        }
    }

    pub(crate) fn build(self) -> ComplianceMatrix {
        let in_period: Vec<Obligation> = self
            .obligations
            .iter()
            .filter(|o| o.reference_month == self.period)
            .cloned()
            .collect();

        let tax_types = self.columns(&in_period);

        let mut profiles: Vec<&CompanyTaxProfile> = self.profiles.iter().collect();
        profiles.sort_by(|a, b| a.company_id.cmp(&b.company_id));

        let rows = profiles
            .into_iter()
            .map(|profile| {
                let cells = tax_types
                    .iter()
                    .map(|tax| {
                        // Duplicates for the same company and tax should not
                        // exist; if they do, the first one exported wins. The
                        // aggregator applies the same rule.
                        let obligation = in_period
                            .iter()
                            .find(|o| o.company_id == profile.company_id && &o.tax_type == tax);
                        classify(obligation, &profile.expected_taxes, tax)
                    })
                    .collect();
                MatrixRow {
                    company_id: profile.company_id.clone(),
                    expected_taxes: profile.expected_taxes.clone(),
                    cells,
                    summary: aggregate(&profile.company_id, &in_period, &profile.expected_taxes),
                }
            })
            .collect();

        ComplianceMatrix {
            period: self.period,
            tax_types,
            rows,
        }
    }

    /// Catalog order first, then any other expected or observed tax type in
    /// code order.
    fn columns(&self, in_period: &[Obligation]) -> Vec<TaxType> {
        let known: Vec<TaxType> = self.catalog.iter().map(|k| k.code.clone()).collect();
        let extra: BTreeSet<TaxType> = self
            .profiles
            .iter()
            .flat_map(|p| p.expected_taxes.iter().cloned())
            .chain(in_period.iter().map(|o| o.tax_type.clone()))
            .filter(|t| !known.contains(t))
            .collect();
        known.into_iter().chain(extra).collect()
    }
}

/// Firm-wide totals of a matrix. `obligations` may span several periods; only
/// those of the matrix period count towards `overdue`.
pub(crate) fn control_overview(
    matrix: &ComplianceMatrix,
    obligations: &[Obligation],
    today: NaiveDate,
) -> ControlOverview {
    let summaries = matrix.rows.iter().map(|r| &r.summary);
    let companies = matrix.rows.len();
    let fully_compliant = matrix
        .rows
        .iter()
        .filter(|r| {
            !r.expected_taxes.is_empty()
                && r.expected_taxes.iter().all(|tax| {
                    matches!(
                        matrix.cell(&r.company_id, tax),
                        Some(DisplayStatus::Posted | DisplayStatus::NotApplicable)
                    )
                })
        })
        .count();
    let overdue = obligations
        .iter()
        .filter(|o| o.reference_month == matrix.period && is_overdue(o, today))
        .count();
    let average_completion_rate = if companies == 0 {
        0.0
    } else {
        summaries.clone().map(|s| s.completion_rate).sum::<f64>() / companies as f64
    };

    ControlOverview {
        period: matrix.period,
        as_of: today,
        companies,
        fully_compliant,
        posted: summaries.clone().map(|s| s.posted).sum(),
        pending: summaries.clone().map(|s| s.pending).sum(),
        not_applicable: summaries.clone().map(|s| s.not_applicable).sum(),
        missing: summaries.map(|s| s.missing).sum(),
        overdue,
        average_completion_rate,
    }
}
