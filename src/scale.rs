use std::cmp::Ordering;

/// Metres of circle radius per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 25_000.0;

/// One colour band on the magnitude axis. `upper` is inclusive; the last
/// bucket is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeBucket {
    pub upper: Option<f64>,
    pub color: &'static str,
}

pub const BUCKET_COUNT: usize = 6;

/// Lightest to darkest. Buckets are (−∞,1], (1,2], (2,3], (3,4], (4,5], (5,∞).
pub static BUCKETS: [MagnitudeBucket; BUCKET_COUNT] = [
    MagnitudeBucket {
        upper: Some(1.0),
        color: "#ffcca5",
    },
    MagnitudeBucket {
        upper: Some(2.0),
        color: "#ffb37e",
    },
    MagnitudeBucket {
        upper: Some(3.0),
        color: "#ff9143",
    },
    MagnitudeBucket {
        upper: Some(4.0),
        color: "#ff6f08",
    },
    MagnitudeBucket {
        upper: Some(5.0),
        color: "#cc5500",
    },
    MagnitudeBucket {
        upper: None,
        color: "#a54500",
    },
];

/// First bucket whose upper bound the magnitude does not exceed. NaN exceeds
/// nothing, so it lands in the lowest bucket along with negative values.
pub fn bucket_for_magnitude(magnitude: f64) -> &'static MagnitudeBucket {
    BUCKETS
        .iter()
        .find(|bucket| match bucket.upper {
            Some(upper) => magnitude.partial_cmp(&upper) != Some(Ordering::Greater),
            None => true,
        })
        .unwrap_or(&BUCKETS[BUCKET_COUNT - 1])
}

pub fn color_for_magnitude(magnitude: f64) -> &'static str {
    bucket_for_magnitude(magnitude).color
}

/// Linear and sign-preserving: a negative magnitude gives a negative radius.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}
