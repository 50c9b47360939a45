//! Sliding-window minimum via a queue built from two stacks with
//! precomputed prefix minima, avoiding the pointer-chasing of a deque.

use super::Sampler;
use crate::kmer::KMer;

/// `rhs` holds freshly pushed positions (newest on top) with a running
/// `rhs_min`. `lhs` holds the older half of the window, built by
/// reversing `rhs` into it on rollover while folding in a prefix minimum
/// per entry, so its top always carries the minimum of everything in
/// `lhs`. The window minimum compares `lhs`'s top against `rhs_min`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SplitWindowWithTwoStacks;

impl Sampler for SplitWindowWithTwoStacks {
    fn sample(&self, hashes: &[u64], w: i32) -> Vec<KMer> {
        let m = hashes.len();
        let w = w as usize;
        let mut dst = Vec::new();
        if w == 0 || w > m {
            return dst;
        }
        dst.reserve(m);

        let mut lhs: Vec<(usize, usize)> = Vec::with_capacity(w + 1);
        let mut rhs: Vec<usize> = Vec::with_capacity(w + 1);
        let mut rhs_min: Option<usize> = None;

        for j in 0..m {
            rhs.push(j);
            rhs_min = Some(match rhs_min {
                Some(cur) if hashes[cur] <= hashes[j] => cur,
                _ => j,
            });

            if lhs.len() + rhs.len() > w {
                if lhs.is_empty() {
                    while let Some(p) = rhs.pop() {
                        let prefix_min_pos = match lhs.last() {
                            Some(&(_, pm)) if hashes[pm] < hashes[p] => pm,
                            _ => p,
                        };
                        lhs.push((p, prefix_min_pos));
                    }
                    rhs_min = None;
                }
                lhs.pop();
            }

            if j + 1 >= w {
                let min_pos = match (lhs.last(), rhs_min) {
                    (Some(&(_, pm)), Some(rm)) => {
                        if hashes[pm] <= hashes[rm] {
                            pm
                        } else {
                            rm
                        }
                    }
                    (Some(&(_, pm)), None) => pm,
                    (None, Some(rm)) => rm,
                    (None, None) => unreachable!("window is never empty once full"),
                };

                if dst.last().map(|k: &KMer| k.position as usize) != Some(min_pos) {
                    dst.push(KMer::new(hashes[min_pos], min_pos as i32, false));
                }
            }
        }

        dst
    }
}
