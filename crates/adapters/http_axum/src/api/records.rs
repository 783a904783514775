//! JSON REST handlers shared by every record collection.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fakeapi_app::ports::RecordRepository;
use fakeapi_domain::record::Record;

use crate::error::ApiError;
use crate::extract::LenientJson;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse<R> {
    Ok(Json<Vec<R>>),
}

impl<R: Serialize> IntoResponse for ListResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse<R> {
    Created(Json<R>),
}

impl<R: Serialize> IntoResponse for CreateResponse<R> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/<collection>`
pub async fn list<S, R>(State(state): State<AppState<S>>) -> Result<ListResponse<R>, ApiError>
where
    S: RecordRepository<R> + Send + Sync + 'static,
    R: Record,
{
    let records = state.record_service.list::<R>().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `POST /api/<collection>`
pub async fn create<S, R>(
    State(state): State<AppState<S>>,
    LenientJson(fields): LenientJson<R::Fields>,
) -> Result<CreateResponse<R>, ApiError>
where
    S: RecordRepository<R> + Send + Sync + 'static,
    R: Record,
{
    let created = state.record_service.create::<R>(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}
