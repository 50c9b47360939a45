//! Reference oracle: recomputes each window's minimum from scratch.

use super::Sampler;
use crate::kmer::KMer;

/// O(n*w): for every window, scan it in full. Used only as the ground
/// truth that every other sampler is tested against.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveSampler;

impl Sampler for NaiveSampler {
    fn sample(&self, hashes: &[u64], w: i32) -> Vec<KMer> {
        let mut dst = Vec::new();
        let m = hashes.len();
        let w = w as usize;
        if w == 0 || w > m {
            return dst;
        }
        dst.reserve(m);

        for i in w..=m {
            let window = &hashes[i - w..i];
            // Sentinel-initialized scan: the first candidate always wins,
            // and later candidates only replace it on a strict improvement
            // so ties keep the smallest (leftmost) position.
            let mut min_pos = i - w;
            let mut min_hash = window[0];
            for (j, &h) in window.iter().enumerate().skip(1) {
                if h < min_hash {
                    min_hash = h;
                    min_pos = i - w + j;
                }
            }

            if dst.last().map(|k: &KMer| k.position as usize) != Some(min_pos) {
                dst.push(KMer::new(min_hash, min_pos as i32, false));
            }
        }

        dst
    }
}
