//! Deque sampler that reuses the output vector as both deque buffer and
//! emission buffer.

use super::Sampler;
use crate::kmer::KMer;

/// Semantically identical to [`super::DequeSampler`], but the deque lives
/// in the same buffer that the emissions are written to, partitioned by
/// `front_idx`/`back_idx` (the live deque) and `idx` (the emission
/// cursor). Invariant: `idx < front_idx <= back_idx`. When an emission
/// would collide with the deque's front (`idx + 1 == front_idx`), the
/// deque's contents are shifted right by one slot first.
#[derive(Debug, Default, Clone, Copy)]
pub struct InplaceDequeSampler;

impl Sampler for InplaceDequeSampler {
    fn sample(&self, hashes: &[u64], w: i32) -> Vec<KMer> {
        let m = hashes.len();
        let w = w as usize;
        if w == 0 || w > m {
            return Vec::new();
        }

        // One contiguous buffer big enough to hold every emission plus the
        // live deque shifted out ahead of it. Each input element can grow
        // `back_idx` by at most 2 (one push, one shift-right), so 2*m+2
        // slots is always enough.
        let mut buf = vec![KMer::new(0, 0, false); 2 * m + 2];

        let mut idx: i64 = -1;
        let mut front_idx: usize = 0;
        let mut back_idx: usize = 0;

        for (j, &h) in hashes.iter().enumerate() {
            while front_idx < back_idx && buf[back_idx - 1].value > h {
                back_idx -= 1;
            }
            buf[back_idx] = KMer::new(h, j as i32, false);
            back_idx += 1;

            if j + 1 >= w {
                if (buf[front_idx].position as usize) + w <= j {
                    front_idx += 1;
                }

                let should_emit = idx < 0 || buf[idx as usize].position != buf[front_idx].position;
                if should_emit {
                    if idx + 1 == front_idx as i64 {
                        buf.copy_within(front_idx..back_idx, front_idx + 1);
                        front_idx += 1;
                        back_idx += 1;
                    }
                    debug_assert!(idx + 1 < front_idx as i64);
                    idx += 1;
                    buf[idx as usize] = buf[front_idx];
                }
            }
        }

        buf.truncate((idx + 1).max(0) as usize);
        buf
    }
}
