//! # fakeapi-adapter-faker
//!
//! Fake data generation backing the seeding routine.
//!
//! ## Generated shapes
//!
//! | Record | Notable values |
//! |--------|----------------|
//! | Auditor | name, email, 11-digit CPF, 15-char password, department |
//! | Company | company name, 14-digit CNPJ, lorem programmes, address, phone |
//! | Employee | job title, ASO date, four booleans, avatar, company in `1..=companies` |
//! | Certification | ten past training dates, employee `ordinal` wrapped into `1..=employees` |
//! | User | name, email, CPF, password, company in `1..=companies` |
//!
//! Every record gets a `criado_em` within the last year and an
//! `atualizado_em` within the last day.
//!
//! ## Dependency rule
//!
//! Depends on `fakeapi-app` (port traits) and `fakeapi-domain` only.

mod fake;
mod words;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fakeapi_app::ports::{RecordGenerator, Seed, SeedContext};
use fakeapi_domain::record::{
    Auditor, AuditorFields, Certification, CertificationFields, Company, CompanyFields, Employee,
    EmployeeFields, User, UserFields,
};
use fakeapi_domain::time::{self, Timestamp, Timestamps};
use fakeapi_domain::value::FieldValue;

/// Generator for every record kind, backed by a [`StdRng`].
pub struct FakerGenerator {
    rng: StdRng,
}

impl Default for FakerGenerator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl FakerGenerator {
    /// Generator producing the same values for the same `seed`.
    ///
    /// Dates stay relative to the current time.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn text(&mut self, make: fn(&mut StdRng) -> String) -> Option<FieldValue> {
        Some(FieldValue::String(make(&mut self.rng)))
    }

    fn flag(&mut self) -> Option<FieldValue> {
        Some(FieldValue::Bool(self.rng.gen_bool(0.5)))
    }

    fn past_date(&mut self, now: Timestamp) -> Option<FieldValue> {
        Some(FieldValue::Timestamp(fake::past(&mut self.rng, now)))
    }

    fn company_reference(&mut self, ctx: &SeedContext) -> Option<FieldValue> {
        fake::reference(&mut self.rng, ctx.companies).and_then(as_field)
    }

    fn timestamps(&mut self, now: Timestamp) -> Timestamps {
        Timestamps {
            created_at: fake::past(&mut self.rng, now),
            updated_at: fake::recent(&mut self.rng, now),
        }
    }
}

fn as_field(value: usize) -> Option<FieldValue> {
    i64::try_from(value).ok().map(FieldValue::Int)
}

impl RecordGenerator<Auditor> for FakerGenerator {
    fn generate(&mut self, _ctx: &SeedContext) -> Seed<Auditor> {
        let now = time::now();
        Seed {
            fields: AuditorFields {
                name: self.text(fake::full_name),
                email: self.text(fake::email),
                cpf: self.text(fake::cpf),
                password: self.text(fake::password),
                department: self.text(fake::department),
            },
            timestamps: self.timestamps(now),
        }
    }
}

impl RecordGenerator<User> for FakerGenerator {
    fn generate(&mut self, ctx: &SeedContext) -> Seed<User> {
        let now = time::now();
        Seed {
            fields: UserFields {
                name: self.text(fake::full_name),
                email: self.text(fake::email),
                cpf: self.text(fake::cpf),
                password: self.text(fake::password),
                company_id: self.company_reference(ctx),
            },
            timestamps: self.timestamps(now),
        }
    }
}

impl RecordGenerator<Company> for FakerGenerator {
    fn generate(&mut self, _ctx: &SeedContext) -> Seed<Company> {
        let now = time::now();
        Seed {
            fields: CompanyFields {
                name: self.text(fake::company_name),
                cnpj: self.text(fake::cnpj),
                risk_management_program: self.text(fake::sentence),
                pcmso: self.text(fake::sentence),
                safety_controls: self.text(fake::sentence),
                address: self.text(fake::street_address),
                email: self.text(fake::email),
                phone: self.text(fake::phone_number),
            },
            timestamps: self.timestamps(now),
        }
    }
}

impl RecordGenerator<Employee> for FakerGenerator {
    fn generate(&mut self, ctx: &SeedContext) -> Seed<Employee> {
        let now = time::now();
        Seed {
            fields: EmployeeFields {
                name: self.text(fake::full_name),
                cpf: self.text(fake::cpf),
                role: self.text(fake::job_title),
                aso: self.past_date(now),
                hired: self.flag(),
                has_training: self.flag(),
                has_documents: self.flag(),
                has_ppe: self.flag(),
                photo: self.text(fake::avatar_url),
                company_id: self.company_reference(ctx),
            },
            timestamps: self.timestamps(now),
        }
    }
}

impl RecordGenerator<Certification> for FakerGenerator {
    fn generate(&mut self, ctx: &SeedContext) -> Seed<Certification> {
        let now = time::now();
        let employee_id = (ctx.employees > 0)
            .then(|| (ctx.ordinal.saturating_sub(1) % ctx.employees) + 1)
            .and_then(as_field);
        Seed {
            fields: CertificationFields {
                service_order: self.past_date(now),
                nr_06: self.past_date(now),
                nr_10: self.past_date(now),
                nr_11: self.past_date(now),
                nr_12: self.past_date(now),
                nr_13: self.past_date(now),
                nr_17: self.past_date(now),
                nr_18: self.past_date(now),
                nr_20: self.past_date(now),
                nr_33: self.past_date(now),
                employee_id,
            },
            timestamps: self.timestamps(now),
        }
    }
}
