#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod image;
pub mod overlay;
pub mod pool;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + result type.
pub use crate::detector::BlobDetector;
pub use crate::types::Blob;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use blob_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let detector = BlobDetector::new();
/// let blobs = detector.detect(img, Vec::new());
/// println!("found {} blobs", blobs.len());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{Blob, BlobDetector};
}
