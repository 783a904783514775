//! A single append-only collection.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fakeapi_app::ports::RecordRepository;
use fakeapi_domain::error::FakeApiError;
use fakeapi_domain::id::IdSequence;
use fakeapi_domain::record::Record;
use fakeapi_domain::time::Timestamps;

struct Inner<R> {
    records: Vec<R>,
    ids: IdSequence,
}

/// Ordered, append-only collection of `R` with its own id counter.
///
/// The lock is only held while pushing or cloning, never across an `.await`.
pub struct InMemoryCollection<R> {
    inner: Mutex<Inner<R>>,
}

impl<R> Default for InMemoryCollection<R> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                ids: IdSequence::default(),
            }),
        }
    }
}

impl<R: Record> InMemoryCollection<R> {
    // Records are only ever pushed whole, so a poisoned lock still guards
    // consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assign the next id, store the record at the end, and return a copy.
    pub fn push(&self, fields: R::Fields, timestamps: Timestamps) -> R {
        let mut inner = self.lock();
        let id = inner.ids.advance();
        let record = R::assemble(id, fields, timestamps);
        inner.records.push(record.clone());
        record
    }

    /// Clone every record, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<R> {
        self.lock().records.clone()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    /// Whether the collection holds no record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Record> RecordRepository<R> for InMemoryCollection<R> {
    fn append(
        &self,
        fields: R::Fields,
        timestamps: Timestamps,
    ) -> impl Future<Output = Result<R, FakeApiError>> + Send {
        let record = self.push(fields, timestamps);
        async { Ok(record) }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<R>, FakeApiError>> + Send {
        let records = self.snapshot();
        async { Ok(records) }
    }

    fn count(&self) -> impl Future<Output = Result<usize, FakeApiError>> + Send {
        let count = self.len();
        async move { Ok(count) }
    }
}
