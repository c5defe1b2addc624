use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Machine-readable reason of a single validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Missing,
    ModelAttributesType,
    ModelType,
    ListType,
    TooShort,
    FloatType,
    LessThanEqual,
    GreaterThanEqual,
    JsonInvalid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocationSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for LocationSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationSegment::Key(key) => f.write_str(key),
            LocationSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Path from the root of the payload to the offending value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Location(Vec<LocationSegment>);

impl Location {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(LocationSegment::Key(key.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(LocationSegment::Index(index));
        Self(segments)
    }

    fn prepend(&mut self, key: &str) {
        self.0.insert(0, LocationSegment::Key(key.to_string()));
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub loc: Location,
    pub msg: String,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Map<String, Value>>,
}

impl ErrorDetail {
    pub fn new(kind: ErrorKind, loc: Location, msg: impl Into<String>, input: Value) -> Self {
        Self {
            kind,
            loc,
            msg: msg.into(),
            input,
            ctx: None,
        }
    }

    pub fn with_ctx(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.ctx
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// Every problem found in a rejected payload, in document order.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{} validation error(s)", .details.len())]
pub struct ValidationError {
    details: Vec<ErrorDetail>,
}

impl ValidationError {
    /// Returns `None` when nothing was collected.
    pub fn from_details(details: Vec<ErrorDetail>) -> Option<Self> {
        if details.is_empty() {
            None
        } else {
            Some(Self { details })
        }
    }

    pub fn single(detail: ErrorDetail) -> Self {
        Self {
            details: vec![detail],
        }
    }

    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }

    pub fn within(mut self, key: &str) -> Self {
        for detail in &mut self.details {
            detail.loc.prepend(key);
        }
        self
    }
}

#[derive(Serialize)]
pub struct ValidationErrorResponse<'a> {
    pub detail: &'a [ErrorDetail],
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let detail = self.details();
        tracing::info!(
            errors = detail.len(),
            first_error = ?detail.first().map(|detail| detail.loc.to_string()),
            "Rejected request payload.",
        );
        (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { detail }))
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_serializes_as_mixed_array() {
        let loc = Location::root().key("points").index(3).key("lng");

        assert_eq!(
            serde_json::to_value(&loc).unwrap(),
            json!(["points", 3, "lng"])
        );
        assert_eq!(loc.to_string(), "points.3.lng");
    }

    #[test]
    fn test_within_prefixes_every_location() {
        let error = ValidationError::from_details(vec![
            ErrorDetail::new(
                ErrorKind::Missing,
                Location::root().key("points"),
                "Field required",
                json!({}),
            ),
            ErrorDetail::new(
                ErrorKind::Missing,
                Location::root(),
                "Field required",
                Value::Null,
            ),
        ])
        .unwrap()
        .within("body");

        let locs: Vec<String> = error
            .details()
            .iter()
            .map(|detail| detail.loc.to_string())
            .collect();
        assert_eq!(locs, vec!["body.points", "body"]);
    }

    #[test]
    fn test_detail_shape() {
        let detail = ErrorDetail::new(
            ErrorKind::LessThanEqual,
            Location::root().key("points").index(0).key("lat"),
            "Input should be less than or equal to 90",
            json!(91),
        )
        .with_ctx("le", 90.0);

        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({
                "type": "less_than_equal",
                "loc": ["points", 0, "lat"],
                "msg": "Input should be less than or equal to 90",
                "input": 91,
                "ctx": {"le": 90.0},
            })
        );
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        assert!(ValidationError::from_details(Vec::new()).is_none());
    }
}
