pub struct CoordinateRange {
    pub min: f64,
    pub max: f64,
}

pub const LATITUDE: CoordinateRange = CoordinateRange {
    min: -90.0,
    max: 90.0,
};

pub const LONGITUDE: CoordinateRange = CoordinateRange {
    min: -180.0,
    max: 180.0,
};

pub const MIN_POINTS: usize = 1;
