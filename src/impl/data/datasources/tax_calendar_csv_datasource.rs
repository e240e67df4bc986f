use fractic_server_error::ServerError;

use crate::{
    entities::{TaxCalendarEntry, TaxType},
    errors::{InvalidCsv, InvalidCsvContent},
};

/// Tax calendar export: `tax_type,due_day,description`, with header row.
pub(crate) trait TaxCalendarCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TaxCalendarEntry>, ServerError>;
}

pub(crate) struct TaxCalendarCsvDatasourceImpl;

impl TaxCalendarCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TaxCalendarCsvDatasource for TaxCalendarCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TaxCalendarEntry>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_tax_type = r.get(0).unwrap_or("").trim();
                    let raw_due_day = r.get(1).unwrap_or("").trim();
                    let raw_description = r.get(2).unwrap_or("");

                    // Parse.
                    if raw_tax_type.is_empty() {
                        return Err(InvalidCsvContent::new("tax calendar row without tax_type"));
                    }
                    let due_day = match raw_due_day {
                        "" => None,
                        d => Some(d.parse::<u32>().map_err(|_| {
                            InvalidCsvContent::new(&format!(
                                "due_day '{}' for {} is not a number",
                                d, raw_tax_type
                            ))
                        })?),
                    };
                    if let Some(d) = due_day {
                        TaxCalendarEntry::check_due_day(d).map_err(|_| {
                            InvalidCsvContent::new(&format!(
                                "due_day {} for {} is not a day of the month (expected 1-31)",
                                d, raw_tax_type
                            ))
                        })?;
                    }

                    // Build.
                    Ok(TaxCalendarEntry {
                        tax_type: TaxType::from(raw_tax_type),
                        due_day,
                        description: raw_description.to_string(),
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_configured_and_empty_due_days() {
        let csv = "tax_type,due_day,description\nDAS,20,Simples Nacional\nFGTS,,\n";
        let entries = TaxCalendarCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tax_type, TaxType::from("DAS"));
        assert_eq!(entries[0].due_day, Some(20));
        assert_eq!(entries[0].description, "Simples Nacional");
        assert_eq!(entries[1].due_day, None);
    }

    #[test]
    fn rejects_non_numeric_due_day() {
        let csv = "tax_type,due_day,description\nDAS,vinte,\n";
        assert!(TaxCalendarCsvDatasourceImpl::new().from_string(csv).is_err());
    }

    #[test]
    fn rejects_due_days_outside_the_month() {
        let datasource = TaxCalendarCsvDatasourceImpl::new();
        for day in ["0", "32", "45"] {
            let csv = format!("tax_type,due_day,description\nDAS,{},x\n", day);
            assert!(datasource.from_string(&csv).is_err(), "due_day {day}");
        }
        let csv = "tax_type,due_day,description\nDAS,1,x\nFGTS,31,y\n";
        assert_eq!(datasource.from_string(csv).unwrap().len(), 2);
    }
}
