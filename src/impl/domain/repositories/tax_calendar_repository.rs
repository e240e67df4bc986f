use fractic_server_error::ServerError;

use crate::entities::TaxCalendarEntry;

/// Backing storage for tax calendar configuration. Entries are upserted by
/// tax type and never deleted; concurrent writers resolve as last write wins.
pub trait TaxCalendarRepository: Send + Sync {
    fn all(&self) -> Result<Vec<TaxCalendarEntry>, ServerError>;

    fn upsert(&self, entry: TaxCalendarEntry) -> Result<(), ServerError>;
}
