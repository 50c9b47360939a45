//! Samplers turn a dense hash array into the ordered, deduplicated list of
//! window minimizers. Every sampler here agrees with every other on the
//! same `(hashes, w)` input.

mod argmin;
mod argmin_recovery;
mod deque;
mod inplace_deque;
mod naive;
pub mod reduce;
mod split_window;

pub use argmin::ArgMinSampler;
pub use argmin_recovery::ArgMinRecoverySampler;
pub use deque::DequeSampler;
pub use inplace_deque::InplaceDequeSampler;
pub use naive::NaiveSampler;
pub use split_window::SplitWindowWithTwoStacks;

use crate::kmer::KMer;

/// Given `hashes[0..m)` and a window length `w`, emit the deduplicated
/// sequence of `(hash, position, strand=false)` minimizer triples in
/// encounter order. Empty input yields empty output; `w <= 0` or `w > m`
/// also yields empty output (no window ever completes).
pub trait Sampler {
    fn sample(&self, hashes: &[u64], w: i32) -> Vec<KMer>;
}
