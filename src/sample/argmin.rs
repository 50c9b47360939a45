//! Index-array sampler that recomputes the window argmin from scratch on
//! every step.

use std::marker::PhantomData;

use super::reduce::{MinReducer, ScalarScan};
use super::Sampler;
use crate::kmer::KMer;

/// Materializes the hash array up front (the caller already did this;
/// this sampler just consumes it) and scans each window with a pluggable
/// [`MinReducer`]. O(n*w), but the inner loop is flat and cache-friendly.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgMinSampler<R: MinReducer = ScalarScan> {
    _reducer: PhantomData<R>,
}

impl<R: MinReducer> Sampler for ArgMinSampler<R> {
    fn sample(&self, hashes: &[u64], w: i32) -> Vec<KMer> {
        let m = hashes.len();
        let w = w as usize;
        let mut dst = Vec::new();
        if w == 0 || w > m {
            return dst;
        }
        dst.reserve(m);

        let mut last_position: Option<usize> = None;
        for i in w..=m {
            let window = &hashes[i - w..i];
            let min_pos = (i - w) + R::argmin(window);

            if last_position != Some(min_pos) {
                dst.push(KMer::new(hashes[min_pos], min_pos as i32, false));
                last_position = Some(min_pos);
            }
        }

        dst
    }
}
