//! The five collections bundled into one store.

use std::future::Future;

use fakeapi_app::ports::RecordRepository;
use fakeapi_domain::error::FakeApiError;
use fakeapi_domain::record::{Auditor, Certification, Company, Employee, Record, User};
use fakeapi_domain::time::Timestamps;

use crate::collection::InMemoryCollection;

/// One in-memory collection per record kind, all created empty.
///
/// Owned by the composition root and shared with handlers behind an `Arc`.
#[derive(Default)]
pub struct InMemoryStore {
    auditors: InMemoryCollection<Auditor>,
    users: InMemoryCollection<User>,
    companies: InMemoryCollection<Company>,
    employees: InMemoryCollection<Employee>,
    certifications: InMemoryCollection<Certification>,
}

impl InMemoryStore {
    /// Create a store with five empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Delegate [`RecordRepository<R>`] to the collection field holding `R`.
macro_rules! delegate_repository {
    ($record:ty => $field:ident) => {
        impl RecordRepository<$record> for InMemoryStore {
            fn append(
                &self,
                fields: <$record as Record>::Fields,
                timestamps: Timestamps,
            ) -> impl Future<Output = Result<$record, FakeApiError>> + Send {
                self.$field.append(fields, timestamps)
            }

            fn list(&self) -> impl Future<Output = Result<Vec<$record>, FakeApiError>> + Send {
                self.$field.list()
            }

            fn count(&self) -> impl Future<Output = Result<usize, FakeApiError>> + Send {
                self.$field.count()
            }
        }
    };
}

delegate_repository!(Auditor => auditors);
delegate_repository!(User => users);
delegate_repository!(Company => companies);
delegate_repository!(Employee => employees);
delegate_repository!(Certification => certifications);
