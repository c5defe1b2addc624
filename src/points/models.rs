use serde::{Deserialize, Serialize};
use std::iter;

/// A validated geographical point. Only the validator builds these, so the
/// coordinates are always within range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    pub(super) fn from_checked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Points in the order they were received. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PointsPayload {
    first: Point,
    rest: Vec<Point>,
}

impl PointsPayload {
    pub fn new(points: Vec<Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(Self {
            first,
            rest: points.collect(),
        })
    }

    pub fn first(&self) -> &Point {
        &self.first
    }

    pub fn count(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        iter::once(&self.first).chain(self.rest.iter())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub bounds: Bounds,
    pub centroid: Centroid,
}
