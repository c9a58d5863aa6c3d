//! Single-pass scan-line blob detection.
//!
//! The detector walks the grayscale image row by row, left to right,
//! assigning every nonzero pixel to a 4-connected blob while accumulating
//! weighted coordinate moments on the fly:
//!
//! - A rolling row-state buffer maps each column to the blob currently
//!   occupying it, covering both "previous row" and "current row so far".
//!   Background pixels clear their column, so stale entries from the row
//!   above never survive past the column that invalidated them.
//! - A pixel with no labeled up/left neighbor opens a new blob; a pixel
//!   with exactly one labeled neighbor (or both naming the same blob)
//!   joins it; a pixel bridging two distinct blobs merges them on the
//!   spot.
//! - A merge folds the left blob's sums into the up blob and tombstones
//!   the absorbed entry; every row-state cell still naming it is rewritten
//!   to the survivor. The rewrite is O(width) per merge; merges are rare
//!   relative to pixels scanned, so this stays simpler and in practice
//!   cheaper than maintaining a union-find structure, at the cost of
//!   quadratic-ish degradation on pathological high-merge-rate images.
//!
//! Finalization converts running sums into mean and standard deviation and
//! compacts away tombstoned entries in creation order. There is no second
//! pass over pixels.

use crate::image::{ImageU8, ImageView};
use crate::pool::BufferPool;
use crate::types::Blob;
use log::debug;


/// Row-state marker for "no blob occupies this column".
///
/// The same value covers both "background pixel above" and "image edge
/// above": either way there is no merge candidate, which is the intended
/// meaning rather than a conflation.
const NO_BLOB: usize = usize::MAX;

/// Tombstone weight marking a blob absorbed by a merge. Live blobs always
/// have positive weight, so the sentinel cannot collide.
const DEAD_WEIGHT: f64 = -1.0;

/// Blob detector with a pooled row-state buffer.
///
/// One detector can serve any number of threads: each call acquires its own
/// row-state buffer, so concurrent [`detect`](BlobDetector::detect) calls
/// on independent images share nothing but the never-blocking pool.
pub struct BlobDetector {
    row_state: BufferPool,
}

impl BlobDetector {
    pub fn new() -> Self {
        Self {
            row_state: BufferPool::new(),
        }
    }

    /// Finds all 4-connected blobs of nonzero pixels in `image`.
    ///
    /// A pixel value of `0` is background; any other value is foreground
    /// and contributes its value as weight. Returned blobs carry the
    /// weighted centroid (`x`, `y`), the population standard deviation of
    /// member coordinates (`x_dev`, `y_dev`), and the total intensity
    /// (`weight`), ordered by first-pixel encounter in scan order.
    ///
    /// Pass a previously returned vector as `out` to reuse its storage; it
    /// is truncated to empty before use, so prior contents never influence
    /// the result. In the common repeated-call case the whole detection
    /// runs without allocating.
    ///
    /// Degenerate grids (zero width or height) yield an empty list; the
    /// call cannot fail.
    pub fn detect(&self, image: ImageU8<'_>, mut out: Vec<Blob>) -> Vec<Blob> {
        out.clear();

        let mut state = self.row_state.acquire(image.w);
        state.fill(NO_BLOB);

        let mut merges = 0usize;
        for (y, row) in image.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v == 0 {
                    // Also clears any stale index left from the row above.
                    state[x] = NO_BLOB;
                    continue;
                }

                let up = state[x];
                let left = if x > 0 { state[x - 1] } else { NO_BLOB };

                let vf = f64::from(v);
                let xf = x as f64;
                let yf = y as f64;

                // Four cases: no neighbor -> new blob; one neighbor (or
                // both the same) -> extend it; two distinct -> merge.
                let target = if up == NO_BLOB && left == NO_BLOB {
                    out.push(Blob {
                        x: xf * vf,
                        y: yf * vf,
                        x_dev: xf * xf * vf,
                        y_dev: yf * yf * vf,
                        weight: vf,
                    });
                    state[x] = out.len() - 1;
                    continue;
                } else if left == NO_BLOB {
                    up
                } else if up == NO_BLOB {
                    left
                } else if up == left {
                    up
                } else {
                    merge(&mut out, &mut state, up, left);
                    merges += 1;
                    up
                };

                let blob = &mut out[target];
                blob.x += xf * vf;
                blob.y += yf * vf;
                blob.x_dev += xf * xf * vf;
                blob.y_dev += yf * yf * vf;
                blob.weight += vf;
                state[x] = target;
            }
        }

        self.row_state.release(state);

        finalize(&mut out);
        debug!(
            "blob scan {}x{}: {} blobs, {} merges",
            image.w,
            image.h,
            out.len(),
            merges
        );
        out
    }
}

impl Default for BlobDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds blob `left` into blob `up` and tombstones `left`.
///
/// Every row-state cell still naming `left` is rewritten to `up`, so no
/// stale reference to the absorbed blob survives the merge.
fn merge(out: &mut [Blob], state: &mut [usize], up: usize, left: usize) {
    let absorbed = out[left];
    let survivor = &mut out[up];
    survivor.x += absorbed.x;
    survivor.y += absorbed.y;
    survivor.x_dev += absorbed.x_dev;
    survivor.y_dev += absorbed.y_dev;
    survivor.weight += absorbed.weight;

    for cell in state.iter_mut() {
        if *cell == left {
            *cell = up;
        }
    }

    out[left].weight = DEAD_WEIGHT;
}

/// Converts running sums into mean/deviation form and drops tombstones.
///
/// Surviving blobs shift down over dead slots in a single pass, preserving
/// creation order with O(1) extra space. Every live blob has positive
/// weight (it was created by a nonzero pixel), so the divisions are safe.
fn finalize(out: &mut Vec<Blob>) {
    let mut dead = 0;
    for i in 0..out.len() {
        let mut blob = out[i];
        if blob.weight == DEAD_WEIGHT {
            dead += 1;
            continue;
        }

        blob.x /= blob.weight;
        blob.y /= blob.weight;
        blob.x_dev = (blob.x_dev / blob.weight - blob.x * blob.x).sqrt();
        blob.y_dev = (blob.y_dev / blob.weight - blob.y * blob.y).sqrt();

        out[i - dead] = blob;
    }
    let live = out.len() - dead;
    out.truncate(live);
}
