//! Strict validation of an untrusted `{"points": [...]}` document.
//!
//! Every check reports into a shared [`Collector`] and keeps going, so a
//! rejected payload carries all of its problems rather than the first one.

use crate::points::consts::{CoordinateRange, LATITUDE, LONGITUDE, MIN_POINTS};
use crate::points::errors::{ErrorDetail, ErrorKind, Location, ValidationError};
use crate::points::models::{Point, PointsPayload};
use serde_json::{Map, Value};

const POINTS_FIELD: &str = "points";

pub fn validate(body: &Value) -> Result<PointsPayload, ValidationError> {
    let mut collector = Collector::default();
    let payload = check_payload(body, &Location::root(), &mut collector);
    collector.finish(payload, body)
}

#[derive(Default)]
struct Collector {
    errors: Vec<ErrorDetail>,
}

impl Collector {
    fn report(&mut self, detail: ErrorDetail) {
        self.errors.push(detail);
    }

    /// Any reported error rejects the whole input. A check that gave up
    /// without reporting still rejects it, as an error at the root.
    fn finish<T>(self, value: Option<T>, input: &Value) -> Result<T, ValidationError> {
        if let Some(error) = ValidationError::from_details(self.errors) {
            return Err(error);
        }
        value.ok_or_else(|| {
            ValidationError::single(ErrorDetail::new(
                ErrorKind::ModelAttributesType,
                Location::root(),
                "Input could not be validated",
                input.clone(),
            ))
        })
    }
}

fn check_payload(
    body: &Value,
    loc: &Location,
    collector: &mut Collector,
) -> Option<PointsPayload> {
    let Value::Object(object) = body else {
        collector.report(ErrorDetail::new(
            ErrorKind::ModelAttributesType,
            loc.clone(),
            "Input should be a valid dictionary or object to extract fields from",
            body.clone(),
        ));
        return None;
    };
    let loc = loc.key(POINTS_FIELD);
    let Some(points) = object.get(POINTS_FIELD) else {
        collector.report(missing(loc, body));
        return None;
    };
    check_points(points, &loc, collector)
}

fn check_points(
    value: &Value,
    loc: &Location,
    collector: &mut Collector,
) -> Option<PointsPayload> {
    let Value::Array(items) = value else {
        collector.report(ErrorDetail::new(
            ErrorKind::ListType,
            loc.clone(),
            "Input should be a valid list",
            value.clone(),
        ));
        return None;
    };
    if items.len() < MIN_POINTS {
        collector.report(
            ErrorDetail::new(
                ErrorKind::TooShort,
                loc.clone(),
                format!(
                    "List should have at least {MIN_POINTS} item after validation, not {}",
                    items.len()
                ),
                value.clone(),
            )
            .with_ctx("field_type", "List")
            .with_ctx("min_length", MIN_POINTS)
            .with_ctx("actual_length", items.len()),
        );
        return None;
    }
    let points = items
        .iter()
        .enumerate()
        .map(|(index, item)| check_point(item, &loc.index(index), collector))
        .collect::<Vec<_>>();
    PointsPayload::new(points.into_iter().collect::<Option<Vec<_>>>()?)
}

fn check_point(value: &Value, loc: &Location, collector: &mut Collector) -> Option<Point> {
    let Value::Object(object) = value else {
        collector.report(
            ErrorDetail::new(
                ErrorKind::ModelType,
                loc.clone(),
                "Input should be a valid dictionary or instance of Point",
                value.clone(),
            )
            .with_ctx("class_name", "Point"),
        );
        return None;
    };
    let lat = check_coordinate(object, value, "lat", &LATITUDE, loc, collector);
    let lng = check_coordinate(object, value, "lng", &LONGITUDE, loc, collector);
    Some(Point::from_checked(lat?, lng?))
}

fn check_coordinate(
    object: &Map<String, Value>,
    parent: &Value,
    field: &str,
    range: &CoordinateRange,
    loc: &Location,
    collector: &mut Collector,
) -> Option<f64> {
    let loc = loc.key(field);
    let Some(value) = object.get(field) else {
        collector.report(missing(loc, parent));
        return None;
    };
    // Only the JSON number tag is accepted; "40.0" is a string, not a number.
    let number = match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    };
    let Some(number) = number else {
        collector.report(ErrorDetail::new(
            ErrorKind::FloatType,
            loc,
            "Input should be a valid number",
            value.clone(),
        ));
        return None;
    };
    check_range(number, value, range, loc, collector)
}

fn check_range(
    number: f64,
    input: &Value,
    range: &CoordinateRange,
    loc: Location,
    collector: &mut Collector,
) -> Option<f64> {
    if number > range.max {
        collector.report(
            ErrorDetail::new(
                ErrorKind::LessThanEqual,
                loc,
                format!("Input should be less than or equal to {}", range.max),
                input.clone(),
            )
            .with_ctx("le", range.max),
        );
        return None;
    }
    if number < range.min {
        collector.report(
            ErrorDetail::new(
                ErrorKind::GreaterThanEqual,
                loc,
                format!("Input should be greater than or equal to {}", range.min),
                input.clone(),
            )
            .with_ctx("ge", range.min),
        );
        return None;
    }
    Some(number)
}

fn missing(loc: Location, parent: &Value) -> ErrorDetail {
    ErrorDetail::new(ErrorKind::Missing, loc, "Field required", parent.clone())
}
