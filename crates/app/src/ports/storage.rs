//! Storage port: one append-only collection per record kind.

use std::future::Future;

use fakeapi_domain::error::FakeApiError;
use fakeapi_domain::record::{Auditor, Certification, Company, Employee, Record, User};
use fakeapi_domain::time::Timestamps;

/// Append-only, ordered collection of `R` records.
pub trait RecordRepository<R: Record> {
    /// Assign the collection's next identifier, store the record at the end
    /// and return it.
    fn append(
        &self,
        fields: R::Fields,
        timestamps: Timestamps,
    ) -> impl Future<Output = Result<R, FakeApiError>> + Send;

    /// Every record, in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<R>, FakeApiError>> + Send;

    /// Number of records currently stored.
    fn count(&self) -> impl Future<Output = Result<usize, FakeApiError>> + Send;
}

/// A store holding a collection for each of the five record kinds.
pub trait Store:
    RecordRepository<Auditor>
    + RecordRepository<User>
    + RecordRepository<Company>
    + RecordRepository<Employee>
    + RecordRepository<Certification>
    + Send
    + Sync
    + 'static
{
}

impl<T> Store for T where
    T: RecordRepository<Auditor>
        + RecordRepository<User>
        + RecordRepository<Company>
        + RecordRepository<Employee>
        + RecordRepository<Certification>
        + Send
        + Sync
        + 'static
{
}
