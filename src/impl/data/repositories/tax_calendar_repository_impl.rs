use std::{collections::BTreeMap, sync::RwLock};

use fractic_server_error::ServerError;

use crate::{
    domain::repositories::tax_calendar_repository::TaxCalendarRepository,
    entities::{TaxCalendarEntry, TaxType},
};

#[derive(Debug, Default)]
pub struct InMemoryTaxCalendarRepository {
    entries: RwLock<BTreeMap<TaxType, TaxCalendarEntry>>,
}

impl InMemoryTaxCalendarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from previously persisted entries. Later duplicates of a tax
    /// type win.
    pub fn seeded(entries: impl IntoIterator<Item = TaxCalendarEntry>) -> Self {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|e| (e.tax_type.clone(), e))
                    .collect(),
            ),
        }
    }
}

impl TaxCalendarRepository for InMemoryTaxCalendarRepository {
    fn all(&self) -> Result<Vec<TaxCalendarEntry>, ServerError> {
        // A poisoned lock still holds a consistent map: every write is a
        // single insert.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.values().cloned().collect())
    }

    fn upsert(&self, entry: TaxCalendarEntry) -> Result<(), ServerError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(entry.tax_type.clone(), entry);
        Ok(())
    }
}
