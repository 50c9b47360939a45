//! Incremental index-array sampler: recovers the running minimum instead
//! of rescanning every window.

use std::marker::PhantomData;

use super::reduce::{MinReducer, ScalarScan};
use super::Sampler;
use crate::kmer::KMer;

/// O(n) amortized: while the running minimum is still inside the window,
/// a step only needs to compare the one incoming hash against it. Only
/// when the minimum falls out of the window (rare, for typical `w`) does
/// it fall back to a full [`MinReducer`] scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgMinRecoverySampler<R: MinReducer = ScalarScan> {
    _reducer: PhantomData<R>,
}

impl<R: MinReducer> Sampler for ArgMinRecoverySampler<R> {
    fn sample(&self, hashes: &[u64], w: i32) -> Vec<KMer> {
        let m = hashes.len();
        let w = w as usize;
        let mut dst = Vec::new();
        if w == 0 || w > m {
            return dst;
        }
        dst.reserve(m);

        let mut min_pos = R::argmin(&hashes[0..w]);
        dst.push(KMer::new(hashes[min_pos], min_pos as i32, false));

        for i in w..m {
            let old_lower = i - w;
            if min_pos > old_lower {
                // The running minimum is still inside the shifted window;
                // only the incoming hash can unseat it.
                let cond = hashes[i] < hashes[min_pos];
                min_pos = if cond { i } else { min_pos };
            } else {
                // The minimum just expired: full recompute over the new window.
                let new_lower = old_lower + 1;
                min_pos = new_lower + R::argmin(&hashes[new_lower..=i]);
            }

            if dst.last().map(|k: &KMer| k.position as usize) != Some(min_pos) {
                dst.push(KMer::new(hashes[min_pos], min_pos as i32, false));
            }
        }

        dst
    }
}
