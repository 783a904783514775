//! Lenient JSON body extractor.
//!
//! Unlike [`axum::Json`], [`LenientJson`] never rejects a body for its shape:
//! - a body whose media type is not exactly `application/json` is read as an
//!   empty object;
//! - an empty body or a JSON array is read as an empty object;
//! - a JSON object fills the known fields, other keys are ignored.
//!
//! Only unparseable JSON and top-level scalars are rejected, with a 400.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde::de::{DeserializeOwned, Error as _};

use crate::error::ApiError;

/// Extracts `T` from a request body, falling back to `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;
        if !is_json {
            return Ok(Self(T::default()));
        }
        parse(&bytes).map(Self)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
}

/// Parse a JSON body into `T`.
///
/// # Errors
///
/// Returns [`ApiError::MalformedBody`] for invalid JSON or a top-level scalar.
pub fn parse<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let value: serde_json::Value = serde_json::from_slice(bytes).map_err(ApiError::MalformedBody)?;
    match value {
        serde_json::Value::Object(_) => {
            serde_json::from_value(value).map_err(ApiError::MalformedBody)
        }
        serde_json::Value::Array(_) => Ok(T::default()),
        _ => Err(ApiError::MalformedBody(serde_json::Error::custom(
            "request body must be a JSON object",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use fakeapi_domain::record::AuditorFields;
    use fakeapi_domain::value::FieldValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).unwrap(),
        );
        map
    }

    #[test]
    fn should_detect_json_content_types() {
        assert!(has_json_content_type(&headers("application/json")));
        assert!(has_json_content_type(&headers(
            "application/json; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers("Application/JSON")));
        assert!(!has_json_content_type(&headers("application/vnd.api+json")));
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn should_fill_known_fields_from_object() {
        let fields: AuditorFields = parse(br#"{"nome": "Ana", "cpf": 123}"#).unwrap();
        assert_eq!(fields.name, Some("Ana".into()));
        assert_eq!(fields.cpf, Some(FieldValue::Int(123)));
        assert!(fields.email.is_none());
    }

    #[test]
    fn should_default_on_empty_body() {
        let fields: AuditorFields = parse(b"  ").unwrap();
        assert_eq!(fields, AuditorFields::default());
    }

    #[test]
    fn should_default_on_array_body() {
        let fields: AuditorFields = parse(b"[1, 2, 3]").unwrap();
        assert_eq!(fields, AuditorFields::default());
    }

    #[test]
    fn should_reject_invalid_json() {
        let result = parse::<AuditorFields>(b"{\"nome\": ");
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }

    #[test]
    fn should_reject_scalar_body() {
        let result = parse::<AuditorFields>(b"42");
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }
}
