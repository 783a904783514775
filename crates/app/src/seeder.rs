//! Seeder: one-time population of every collection at startup.

use fakeapi_domain::error::FakeApiError;
use fakeapi_domain::record::{Auditor, Certification, Company, Employee, Record, User};

use crate::ports::{Generators, RecordGenerator, RecordRepository, SeedContext, Store};

/// How many records to generate per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub auditors: usize,
    /// Users are not seeded by default.
    pub users: usize,
    pub companies: usize,
    pub employees: usize,
    pub certifications: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            auditors: 10,
            users: 0,
            companies: 5,
            employees: 15,
            certifications: 15,
        }
    }
}

/// Runs a [`SeedPlan`] against a store. Consumed by [`run`](Self::run) so a
/// given seeder fills the store at most once.
pub struct Seeder {
    plan: SeedPlan,
}

impl Seeder {
    /// Create a seeder for `plan`.
    #[must_use]
    pub fn new(plan: SeedPlan) -> Self {
        Self { plan }
    }

    /// Generate and append every planned record.
    ///
    /// Companies are seeded before employees, and employees before
    /// certifications, so cross-references point at records that exist.
    ///
    /// # Errors
    ///
    /// Returns the first storage error raised while appending.
    pub async fn run<S, G>(self, store: &S, generator: &mut G) -> Result<(), FakeApiError>
    where
        S: Store,
        G: Generators,
    {
        self.seed::<Auditor, _, _>(store, generator, self.plan.auditors).await?;
        self.seed::<Company, _, _>(store, generator, self.plan.companies).await?;
        self.seed::<Employee, _, _>(store, generator, self.plan.employees).await?;
        self.seed::<Certification, _, _>(store, generator, self.plan.certifications)
            .await?;
        self.seed::<User, _, _>(store, generator, self.plan.users).await
    }

    async fn seed<R, S, G>(
        &self,
        store: &S,
        generator: &mut G,
        count: usize,
    ) -> Result<(), FakeApiError>
    where
        R: Record,
        S: RecordRepository<R> + Sync,
        G: RecordGenerator<R>,
    {
        for ordinal in 1..=count {
            let ctx = SeedContext {
                ordinal,
                companies: self.plan.companies,
                employees: self.plan.employees,
            };
            let seed = generator.generate(&ctx);
            store.append(seed.fields, seed.timestamps).await?;
        }
        let total = store.count().await?;
        tracing::info!(collection = %R::KIND, count = total, "seeded collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Seed;
    use fakeapi_domain::id::IdSequence;
    use fakeapi_domain::record::{
        AuditorFields, CertificationFields, CompanyFields, EmployeeFields, UserFields,
    };
    use fakeapi_domain::time::Timestamps;
    use fakeapi_domain::value::FieldValue;
    use std::future::Future;
    use std::sync::Mutex;

    struct Collection<R> {
        inner: Mutex<(Vec<R>, IdSequence)>,
    }

    impl<R> Default for Collection<R> {
        fn default() -> Self {
            Self {
                inner: Mutex::new((Vec::new(), IdSequence::default())),
            }
        }
    }

    #[derive(Default)]
    struct TestStore {
        auditors: Collection<Auditor>,
        users: Collection<User>,
        companies: Collection<Company>,
        employees: Collection<Employee>,
        certifications: Collection<Certification>,
    }

    macro_rules! impl_repo {
        ($record:ty, $field:ident) => {
            impl RecordRepository<$record> for TestStore {
                fn append(
                    &self,
                    fields: <$record as Record>::Fields,
                    timestamps: Timestamps,
                ) -> impl Future<Output = Result<$record, FakeApiError>> + Send {
                    let mut inner = self.$field.inner.lock().unwrap();
                    let record = <$record>::assemble(inner.1.advance(), fields, timestamps);
                    inner.0.push(record.clone());
                    async { Ok(record) }
                }

                fn list(&self) -> impl Future<Output = Result<Vec<$record>, FakeApiError>> + Send {
                    let result = self.$field.inner.lock().unwrap().0.clone();
                    async { Ok(result) }
                }

                fn count(&self) -> impl Future<Output = Result<usize, FakeApiError>> + Send {
                    let result = self.$field.inner.lock().unwrap().0.len();
                    async move { Ok(result) }
                }
            }
        };
    }

    impl_repo!(Auditor, auditors);
    impl_repo!(User, users);
    impl_repo!(Company, companies);
    impl_repo!(Employee, employees);
    impl_repo!(Certification, certifications);

    /// Records the context it was called with in the employee/certification
    /// reference fields so tests can inspect it.
    struct EchoGenerator;

    fn ordinal(ctx: &SeedContext) -> Option<FieldValue> {
        Some(FieldValue::Int(i64::try_from(ctx.ordinal).unwrap()))
    }

    impl RecordGenerator<Auditor> for EchoGenerator {
        fn generate(&mut self, _ctx: &SeedContext) -> Seed<Auditor> {
            Seed {
                fields: AuditorFields::default(),
                timestamps: Timestamps::now(),
            }
        }
    }

    impl RecordGenerator<User> for EchoGenerator {
        fn generate(&mut self, _ctx: &SeedContext) -> Seed<User> {
            Seed {
                fields: UserFields::default(),
                timestamps: Timestamps::now(),
            }
        }
    }

    impl RecordGenerator<Company> for EchoGenerator {
        fn generate(&mut self, _ctx: &SeedContext) -> Seed<Company> {
            Seed {
                fields: CompanyFields::default(),
                timestamps: Timestamps::now(),
            }
        }
    }

    impl RecordGenerator<Employee> for EchoGenerator {
        fn generate(&mut self, ctx: &SeedContext) -> Seed<Employee> {
            Seed {
                fields: EmployeeFields {
                    company_id: Some(FieldValue::Int(i64::try_from(ctx.companies).unwrap())),
                    ..EmployeeFields::default()
                },
                timestamps: Timestamps::now(),
            }
        }
    }

    impl RecordGenerator<Certification> for EchoGenerator {
        fn generate(&mut self, ctx: &SeedContext) -> Seed<Certification> {
            Seed {
                fields: CertificationFields {
                    employee_id: ordinal(ctx),
                    ..CertificationFields::default()
                },
                timestamps: Timestamps::now(),
            }
        }
    }

    #[tokio::test]
    async fn should_seed_default_plan_counts() {
        let store = TestStore::default();

        Seeder::new(SeedPlan::default())
            .run(&store, &mut EchoGenerator)
            .await
            .unwrap();

        assert_eq!(RecordRepository::<Auditor>::count(&store).await.unwrap(), 10);
        assert_eq!(RecordRepository::<User>::count(&store).await.unwrap(), 0);
        assert_eq!(RecordRepository::<Company>::count(&store).await.unwrap(), 5);
        assert_eq!(RecordRepository::<Employee>::count(&store).await.unwrap(), 15);
        assert_eq!(
            RecordRepository::<Certification>::count(&store).await.unwrap(),
            15
        );
    }

    #[tokio::test]
    async fn should_leave_users_empty_by_default() {
        let store = TestStore::default();
        Seeder::new(SeedPlan::default())
            .run(&store, &mut EchoGenerator)
            .await
            .unwrap();

        let users = RecordRepository::<User>::list(&store).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn should_pass_ordinal_and_ranges_to_generator() {
        let store = TestStore::default();
        let plan = SeedPlan {
            auditors: 0,
            users: 0,
            companies: 3,
            employees: 2,
            certifications: 4,
        };
        Seeder::new(plan).run(&store, &mut EchoGenerator).await.unwrap();

        let employees = RecordRepository::<Employee>::list(&store).await.unwrap();
        assert!(employees
            .iter()
            .all(|e| e.fields.company_id == Some(FieldValue::Int(3))));

        let certifications = RecordRepository::<Certification>::list(&store).await.unwrap();
        let refs: Vec<_> = certifications
            .iter()
            .map(|c| c.fields.employee_id.as_ref().and_then(FieldValue::as_i64))
            .collect();
        assert_eq!(refs, vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[tokio::test]
    async fn should_assign_ids_from_one_when_seeding() {
        let store = TestStore::default();
        Seeder::new(SeedPlan::default())
            .run(&store, &mut EchoGenerator)
            .await
            .unwrap();

        let companies = RecordRepository::<Company>::list(&store).await.unwrap();
        let ids: Vec<u64> = companies.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
