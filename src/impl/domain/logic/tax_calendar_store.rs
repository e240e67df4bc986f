use fractic_server_error::ServerError;

use crate::{
    data::repositories::tax_calendar_repository_impl::InMemoryTaxCalendarRepository,
    domain::repositories::tax_calendar_repository::TaxCalendarRepository,
    entities::{KnownTaxType, TaxCalendar, TaxCalendarEntry, TaxType},
    errors::ValidationError,
};

/// Tax calendar access: stored configuration merged with the catalog of
/// known tax types.
pub struct TaxCalendarStore<R = InMemoryTaxCalendarRepository>
where
    R: TaxCalendarRepository,
{
    repository: R,
    catalog: Vec<KnownTaxType>,
}

impl TaxCalendarStore {
    pub fn new(catalog: Vec<KnownTaxType>) -> Self {
        Self::with_repository(InMemoryTaxCalendarRepository::new(), catalog)
    }
}

impl<R: TaxCalendarRepository> TaxCalendarStore<R> {
    pub fn with_repository(repository: R, catalog: Vec<KnownTaxType>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub fn catalog(&self) -> &[KnownTaxType] {
        &self.catalog
    }

    /// Every catalog tax type is present in the result; those without stored
    /// configuration have no due day and the catalog description. Stored tax
    /// types outside the catalog are kept as well.
    pub fn load(&self) -> Result<TaxCalendar, ServerError> {
        let mut calendar = TaxCalendar::default();
        for known in &self.catalog {
            calendar.entries.insert(
                known.code.clone(),
                TaxCalendarEntry {
                    tax_type: known.code.clone(),
                    due_day: None,
                    description: known.description.clone(),
                },
            );
        }
        let stored = self.repository.all()?;
        tracing::debug!(
            stored = stored.len(),
            catalog = self.catalog.len(),
            "loaded tax calendar"
        );
        for entry in stored {
            calendar.entries.insert(entry.tax_type.clone(), entry);
        }
        Ok(calendar)
    }

    pub fn save(
        &self,
        tax_type: &TaxType,
        due_day: u32,
        description: &str,
    ) -> Result<TaxCalendarEntry, ServerError> {
        if tax_type.as_str().trim().is_empty() {
            return Err(ValidationError::new("taxType", "must not be empty"));
        }
        TaxCalendarEntry::check_due_day(due_day)?;
        let entry = TaxCalendarEntry {
            tax_type: tax_type.clone(),
            due_day: Some(due_day),
            description: description.to_string(),
        };
        self.repository.upsert(entry.clone())?;
        tracing::info!(tax_type = %tax_type, due_day, "saved tax calendar entry");
        Ok(entry)
    }
}
