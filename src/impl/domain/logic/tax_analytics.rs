use std::collections::BTreeMap;

use crate::entities::{CompetencePeriod, MonthlyTaxTotal, Obligation, TaxType, TaxVariance};

/// Sums obligation amounts by (period, tax type). Obligations without an
/// amount are skipped.
pub fn monthly_totals(obligations: &[Obligation]) -> Vec<MonthlyTaxTotal> {
    obligations
        .iter()
        .filter_map(|o| o.amount.map(|amount| ((o.reference_month, o.tax_type.clone()), amount)))
        .fold(
            BTreeMap::<(CompetencePeriod, TaxType), (f64, usize)>::new(),
            |mut map, (key, amount)| {
                let entry = map.entry(key).or_insert((0.0, 0));
                entry.0 += amount;
                entry.1 += 1;
                map
            },
        )
        .into_iter()
        .map(|((period, tax_type), (total, count))| MonthlyTaxTotal {
            period,
            tax_type,
            total,
            count,
        })
        .collect()
}

/// Month-over-month change for every tax type with a total in `period`.
pub fn variance(totals: &[MonthlyTaxTotal], period: CompetencePeriod) -> Vec<TaxVariance> {
    let previous_period = period.previous();
    let lookup: BTreeMap<(CompetencePeriod, &TaxType), f64> = totals
        .iter()
        .map(|t| ((t.period, &t.tax_type), t.total))
        .collect();

    let mut current: Vec<&MonthlyTaxTotal> =
        totals.iter().filter(|t| t.period == period).collect();
    current.sort_by(|a, b| a.tax_type.cmp(&b.tax_type));

    current
        .into_iter()
        .map(|t| {
            let previous_total =
                previous_period.and_then(|p| lookup.get(&(p, &t.tax_type)).copied());
            let variance_pct = previous_total
                .filter(|previous| *previous != 0.0)
                .map(|previous| (t.total - previous) / previous.abs() * 100.0);
            TaxVariance {
                tax_type: t.tax_type.clone(),
                period,
                previous_total,
                current_total: t.total,
                variance_pct,
            }
        })
        .collect()
}
