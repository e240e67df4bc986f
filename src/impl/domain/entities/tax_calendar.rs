use std::collections::BTreeMap;

use fractic_server_error::ServerError;

use crate::errors::ValidationError;

use super::tax_type::TaxType;

/// Stored due-day configuration for one tax type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxCalendarEntry {
    pub tax_type: TaxType,
    /// Day of the month following competence on which the tax is due. `None`
    /// for catalog tax types nobody has configured yet.
    pub due_day: Option<u32>,
    pub description: String,
}

impl TaxCalendarEntry {
    /// Due days are configured as 1-31; shorter months clamp at resolution.
    pub(crate) fn check_due_day(due_day: u32) -> Result<u32, ServerError> {
        if !(1..=31).contains(&due_day) {
            return Err(ValidationError::new(
                "dueDay",
                &format!("{} is not a day of the month (expected 1-31)", due_day),
            ));
        }
        Ok(due_day)
    }
}

/// Result of loading the calendar: stored entries merged with the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxCalendar {
    pub(crate) entries: BTreeMap<TaxType, TaxCalendarEntry>,
}

impl TaxCalendar {
    pub fn get(&self, tax_type: &TaxType) -> Option<&TaxCalendarEntry> {
        self.entries.get(tax_type)
    }

    pub fn due_day(&self, tax_type: &TaxType) -> Option<u32> {
        self.entries.get(tax_type).and_then(|e| e.due_day)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxCalendarEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
