use crate::points::errors::{ErrorDetail, ErrorKind, Location, ValidationError};
use crate::points::models::PointsPayload;
use crate::points::validation;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

const BODY: &str = "body";

/// A request body that passed [`validation::validate`].
///
/// The body is decoded as JSON when there is no `Content-Type` or it names a
/// JSON media type; any other body is rejected as not being an object.
/// Locations in the rejection are relative to the request, so they all start
/// with `body`.
pub struct ValidatedPoints(pub PointsPayload);

pub enum PointsRejection {
    Validation(ValidationError),
    Body(BytesRejection),
}

impl From<ValidationError> for PointsRejection {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<BytesRejection> for PointsRejection {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for PointsRejection {
    fn into_response(self) -> Response {
        match self {
            PointsRejection::Validation(error) => error.into_response(),
            PointsRejection::Body(rejection) => {
                tracing::warn!(reason = %rejection.body_text(), "Failed to read request body.");
                rejection.into_response()
            }
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for ValidatedPoints
where
    S: Send + Sync,
{
    type Rejection = PointsRejection;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(request.headers().get(CONTENT_TYPE));
        let body = Bytes::from_request(request, state).await?;
        let document = decode(&body, is_json)?;
        let points = validation::validate(&document).map_err(|error| error.within(BODY))?;
        Ok(ValidatedPoints(points))
    }
}

/// A missing header counts as JSON, as do `application/json` and
/// `application/*+json`.
fn is_json_content_type(content_type: Option<&HeaderValue>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match media_type.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

fn decode(body: &[u8], is_json: bool) -> Result<Value, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::single(ErrorDetail::new(
            ErrorKind::Missing,
            Location::root().key(BODY),
            "Field required",
            Value::Null,
        )));
    }
    if !is_json {
        return Err(ValidationError::single(ErrorDetail::new(
            ErrorKind::ModelAttributesType,
            Location::root().key(BODY),
            "Input should be a valid dictionary or object to extract fields from",
            Value::String(String::from_utf8_lossy(body).into_owned()),
        )));
    }
    serde_json::from_slice(body).map_err(|error| {
        let offset = char_offset(body, error.line(), error.column());
        ValidationError::single(
            ErrorDetail::new(
                ErrorKind::JsonInvalid,
                Location::root().key(BODY).index(offset),
                "JSON decode error",
                Value::Object(Map::new()),
            )
            .with_ctx("error", error.to_string()),
        )
    })
}

/// Converts the decoder's 1-based line and byte column into a character
/// offset into `body`. Falls back to the byte offset for invalid UTF-8.
fn char_offset(body: &[u8], line: usize, column: usize) -> usize {
    let preceding_lines = body
        .split(|byte| *byte == b'\n')
        .take(line.saturating_sub(1))
        .map(|segment| segment.len() + 1)
        .sum::<usize>();
    let byte_offset = (preceding_lines + column.saturating_sub(1)).min(body.len());
    std::str::from_utf8(&body[..byte_offset])
        .map(|prefix| prefix.chars().count())
        .unwrap_or(byte_offset)
}
