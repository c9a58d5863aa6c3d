use serde::Serialize;

/// A maximal 4-connected region of nonzero pixels, summarized by its
/// intensity-weighted coordinate moments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Blob {
    // average location
    pub x: f64,
    pub y: f64,

    // standard deviation of the member pixel coordinates
    pub x_dev: f64,
    pub y_dev: f64,

    /// Sum of the member pixel values.
    pub weight: f64,
}
