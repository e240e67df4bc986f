use std::collections::BTreeSet;

use crate::entities::{CompanyId, CompletionSummary, DisplayStatus, Obligation, TaxType};

use super::status_classifier::classify;

/// Folds a company's obligations for one period against the taxes it is
/// expected to file. Obligations of other companies are ignored, and only the
/// first obligation per tax type counts, as in the compliance matrix.
pub fn aggregate(
    company_id: &CompanyId,
    obligations: &[Obligation],
    expected_taxes: &BTreeSet<TaxType>,
) -> CompletionSummary {
    let mut present: BTreeSet<&TaxType> = BTreeSet::new();
    let own: Vec<&Obligation> = obligations
        .iter()
        .filter(|o| &o.company_id == company_id && present.insert(&o.tax_type))
        .collect();

    let (posted, pending, not_applicable) =
        own.iter()
            .fold((0, 0, 0), |(posted, pending, not_applicable), o| {
                match classify(Some(*o), expected_taxes, &o.tax_type) {
                    DisplayStatus::Posted => (posted + 1, pending, not_applicable),
                    DisplayStatus::Pending => (posted, pending + 1, not_applicable),
                    DisplayStatus::NotApplicable => (posted, pending, not_applicable + 1),
                    _ => (posted, pending, not_applicable),
                }
            });

    let missing_taxes: Vec<TaxType> = expected_taxes
        .iter()
        .filter(|t| !present.contains(t))
        .cloned()
        .collect();

    // Obligations for taxes the company is not expected to file still count
    // as fulfilled, hence the cap.
    let completion_rate = ((posted + not_applicable) as f64
        / expected_taxes.len().max(1) as f64)
        .min(1.0);

    tracing::debug!(
        company = %company_id,
        obligations = own.len(),
        posted,
        pending,
        not_applicable,
        missing = missing_taxes.len(),
        "aggregated completion"
    );

    CompletionSummary {
        company_id: company_id.clone(),
        posted,
        pending,
        not_applicable,
        missing: missing_taxes.len(),
        missing_taxes,
        completion_rate,
    }
}
