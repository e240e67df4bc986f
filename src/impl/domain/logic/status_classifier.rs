use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::entities::{DisplayStatus, Obligation, ObligationStatus, StatusBadge, TaxType};

/// Display status of the `tax_type` cell for one company. `obligation` is the
/// company's obligation for that tax in the period, if any.
///
/// The order of checks matters: an obligation that was submitted, paid or has
/// a document attached is posted even when it is also marked not applicable.
pub fn classify(
    obligation: Option<&Obligation>,
    expected_taxes: &BTreeSet<TaxType>,
    tax_type: &TaxType,
) -> DisplayStatus {
    let Some(obligation) = obligation else {
        return if expected_taxes.contains(tax_type) {
            DisplayStatus::Missing
        } else {
            DisplayStatus::Unconfigured
        };
    };
    match &obligation.status {
        ObligationStatus::Submitted | ObligationStatus::Paid => DisplayStatus::Posted,
        _ if obligation.has_file => DisplayStatus::Posted,
        ObligationStatus::NotApplicable => DisplayStatus::NotApplicable,
        ObligationStatus::Pending => DisplayStatus::Pending,
        ObligationStatus::Other(_) => DisplayStatus::Unknown,
    }
}

pub fn classify_badge(
    obligation: Option<&Obligation>,
    expected_taxes: &BTreeSet<TaxType>,
    tax_type: &TaxType,
) -> StatusBadge {
    classify(obligation, expected_taxes, tax_type).badge()
}

/// Pending obligations whose due date has passed.
pub fn is_overdue(obligation: &Obligation, today: NaiveDate) -> bool {
    classify(
        Some(obligation),
        &BTreeSet::new(),
        &obligation.tax_type,
    ) == DisplayStatus::Pending
        && obligation.due_date < today
}
