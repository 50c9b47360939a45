//! Monotone-deque sliding-window minimum.

use std::collections::VecDeque;

use super::Sampler;
use crate::kmer::KMer;

/// Classical O(n) monotone-deque sliding-window minimum: a deque of
/// `(hash, position)` pairs, strictly increasing front-to-back.
#[derive(Debug, Default, Clone, Copy)]
pub struct DequeSampler;

impl Sampler for DequeSampler {
    fn sample(&self, hashes: &[u64], w: i32) -> Vec<KMer> {
        let mut dst = Vec::new();
        let m = hashes.len();
        let w = w as usize;
        if w == 0 || w > m {
            return dst;
        }
        dst.reserve(m);

        let mut window: VecDeque<KMer> = VecDeque::new();

        for (j, &h) in hashes.iter().enumerate() {
            while matches!(window.back(), Some(back) if back.value > h) {
                window.pop_back();
            }
            window.push_back(KMer::new(h, j as i32, false));

            if j + 1 >= w {
                if let Some(front) = window.front() {
                    if (front.position as usize) + w <= j {
                        window.pop_front();
                    }
                }
                let front = *window.front().unwrap();
                if dst.last().map(|k: &KMer| k.position) != Some(front.position) {
                    dst.push(front);
                }
            }
        }

        dst
    }
}
