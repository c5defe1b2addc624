use crate::points::models::{Bounds, Centroid, PointsPayload, Summary};

/// Bounding box and arithmetic-mean centroid of `points`, in one pass.
///
/// Longitudes are treated as plain signed numbers: a set of points spanning
/// the antimeridian gets a box (and centroid) that goes the long way around.
pub fn summarize(points: &PointsPayload) -> Summary {
    let first = points.first();
    let mut bounds = Bounds {
        north: first.lat(),
        south: first.lat(),
        east: first.lng(),
        west: first.lng(),
    };
    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;

    for point in points.iter() {
        bounds.north = bounds.north.max(point.lat());
        bounds.south = bounds.south.min(point.lat());
        bounds.east = bounds.east.max(point.lng());
        bounds.west = bounds.west.min(point.lng());
        lat_sum += point.lat();
        lng_sum += point.lng();
    }

    let count = points.count() as f64;
    Summary {
        bounds,
        centroid: Centroid {
            lat: lat_sum / count,
            lng: lng_sum / count,
        },
    }
}
