use serde::Serialize;

/// Bounding box in longitude/latitude degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryExtent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl From<(f64, f64, f64, f64)> for GeometryExtent {
    fn from(extent: (f64, f64, f64, f64)) -> Self {
        GeometryExtent {
            minx: extent.0,
            miny: extent.1,
            maxx: extent.2,
            maxy: extent.3,
        }
    }
}

impl GeometryExtent {
    /// Smallest box holding every (lon, lat) pair, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().fold(None, |acc, (x, y)| {
            Some(match acc {
                None => GeometryExtent::from((x, y, x, y)),
                Some(e) => GeometryExtent::from((
                    e.minx.min(x),
                    e.miny.min(y),
                    e.maxx.max(x),
                    e.maxy.max(y),
                )),
            })
        })
    }
}
