use std::collections::BTreeSet;

use super::{obligation::CompanyId, tax_type::TaxType};

/// Tax types a company is expected to file every period.
#[derive(Debug, Clone)]
pub struct CompanyTaxProfile {
    pub company_id: CompanyId,
    pub expected_taxes: BTreeSet<TaxType>,
}
