//! Record service: list and create use-cases shared by every record kind.

use fakeapi_domain::error::FakeApiError;
use fakeapi_domain::record::Record;
use fakeapi_domain::time::Timestamps;

use crate::ports::RecordRepository;

/// Application service for listing and creating records.
///
/// Generic over the store; each method is generic over the record kind, so a
/// single service serves all five collections.
pub struct RecordService<S> {
    store: S,
}

impl<S> RecordService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every record of kind `R`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list<R>(&self) -> Result<Vec<R>, FakeApiError>
    where
        R: Record,
        S: RecordRepository<R> + Sync,
    {
        let records = RecordRepository::<R>::list(&self.store).await?;
        tracing::debug!(collection = %R::KIND, count = records.len(), "listed records");
        Ok(records)
    }

    /// Create a record of kind `R` from caller-supplied fields.
    ///
    /// Fields are stored as given; the store assigns the identifier and both
    /// timestamps are set to the current instant.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create<R>(&self, fields: R::Fields) -> Result<R, FakeApiError>
    where
        R: Record,
        S: RecordRepository<R> + Sync,
    {
        let record = RecordRepository::<R>::append(&self.store, fields, Timestamps::now()).await?;
        tracing::info!(collection = %R::KIND, id = %record.id(), "created record");
        Ok(record)
    }
}
