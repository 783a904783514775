//! JSON REST API.
//!
//! Every collection gets the same pair of endpoints:
//!   - `GET  /api/<collection>`: list all records, in insertion order
//!   - `POST /api/<collection>`: create a record, respond `201 Created`

#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::Router;
use axum::routing::get;

use fakeapi_app::ports::{RecordRepository, Store};
use fakeapi_domain::record::{Auditor, Certification, Company, Employee, Record, User};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S: Store>() -> Router<AppState<S>> {
    let router = Router::new();
    let router = collection::<S, Auditor>(router);
    let router = collection::<S, User>(router);
    let router = collection::<S, Company>(router);
    let router = collection::<S, Employee>(router);
    collection::<S, Certification>(router)
}

/// Mount the list and create endpoints of `R` at `/<collection>`.
fn collection<S, R>(router: Router<AppState<S>>) -> Router<AppState<S>>
where
    S: RecordRepository<R> + Send + Sync + 'static,
    R: Record,
{
    router.route(
        &format!("/{}", R::KIND.collection()),
        get(records::list::<S, R>).post(records::create::<S, R>),
    )
}
