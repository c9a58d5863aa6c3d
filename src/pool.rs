//! Reusable row-state buffers for the scan loop.
//!
//! Repeated detection calls on same-width images reuse the column index
//! array instead of reallocating it, keeping the hot path allocation-free.
//! The pool is a best-effort cache, not a resource limit: it never blocks,
//! and a dropped buffer (pool full, lock contended) only costs a fresh
//! allocation on some later call. Results never depend on pooled contents.

use std::sync::Mutex;

/// Maximum number of buffers retained between calls.
const POOL_CAPACITY: usize = 10;

/// Bounded, never-blocking cache of `Vec<usize>` scratch buffers.
pub struct BufferPool {
    slots: Mutex<Vec<Vec<usize>>>,
}

impl BufferPool {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Vec::new()),
        }
    }

    /// Returns a buffer of length `min_size` with unspecified contents.
    ///
    /// Reuses a pooled buffer when one with sufficient capacity is
    /// available; otherwise allocates. A contended pool falls back to
    /// allocation rather than waiting.
    pub fn acquire(&self, min_size: usize) -> Vec<usize> {
        if let Ok(mut slots) = self.slots.try_lock() {
            if let Some(mut buf) = slots.pop() {
                if buf.capacity() >= min_size {
                    buf.clear();
                    buf.resize(min_size, 0);
                    return buf;
                }
                // Undersized entry: drop it and allocate below.
            }
        }
        vec![0; min_size]
    }

    /// Offers `buf` back to the pool; discarded when full or contended.
    pub fn release(&self, buf: Vec<usize>) {
        if let Ok(mut slots) = self.slots.try_lock() {
            if slots.len() < POOL_CAPACITY {
                slots.push(buf);
            }
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{BufferPool, POOL_CAPACITY};

    #[test]
    fn released_buffer_is_reused() {
        let pool = BufferPool::new();
        let buf = pool.acquire(16);
        let ptr = buf.as_ptr();
        pool.release(buf);

        let again = pool.acquire(16);
        assert_eq!(again.as_ptr(), ptr, "expected the pooled buffer back");
        assert_eq!(again.len(), 16);
    }

    #[test]
    fn undersized_buffer_is_not_handed_out() {
        let pool = BufferPool::new();
        pool.release(Vec::with_capacity(4));

        let buf = pool.acquire(64);
        assert_eq!(buf.len(), 64);
        assert!(buf.capacity() >= 64);
    }

    #[test]
    fn capacity_bound_discards_excess() {
        let pool = BufferPool::new();
        for _ in 0..POOL_CAPACITY + 5 {
            pool.release(Vec::with_capacity(100));
        }
        // Drain without releasing; the oversized capacity marks pooled
        // buffers apart from fresh allocations.
        let mut pooled = 0;
        for _ in 0..POOL_CAPACITY + 5 {
            if pool.acquire(8).capacity() >= 100 {
                pooled += 1;
            }
        }
        assert_eq!(pooled, POOL_CAPACITY);
    }

    #[test]
    fn zero_size_acquire() {
        let pool = BufferPool::new();
        let buf = pool.acquire(0);
        assert!(buf.is_empty());
        pool.release(buf);
    }
}
