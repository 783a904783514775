//! Generator port: fake data for seeding.

use fakeapi_domain::record::{Auditor, Certification, Company, Employee, Record, User};
use fakeapi_domain::time::Timestamps;

/// Where a generated record sits in the seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedContext {
    /// 1-based position of the record within its collection.
    pub ordinal: usize,
    /// Number of companies seeded; valid company references are `1..=companies`.
    pub companies: usize,
    /// Number of employees seeded; valid employee references are `1..=employees`.
    pub employees: usize,
}

/// Fields and timestamps of a record about to be seeded.
pub struct Seed<R: Record> {
    pub fields: R::Fields,
    pub timestamps: Timestamps,
}

/// Produces structurally valid fake values for one record kind.
pub trait RecordGenerator<R: Record> {
    /// Generate the record at `ctx.ordinal`.
    fn generate(&mut self, ctx: &SeedContext) -> Seed<R>;
}

/// A generator covering all five record kinds.
pub trait Generators:
    RecordGenerator<Auditor>
    + RecordGenerator<User>
    + RecordGenerator<Company>
    + RecordGenerator<Employee>
    + RecordGenerator<Certification>
{
}

impl<T> Generators for T where
    T: RecordGenerator<Auditor>
        + RecordGenerator<User>
        + RecordGenerator<Company>
        + RecordGenerator<Employee>
        + RecordGenerator<Certification>
{
}
