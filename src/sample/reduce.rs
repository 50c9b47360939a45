//! Pluggable inner reduction for the ArgMin family: "smallest-index argmin
//! over a window of hashes". This is the seam a SIMD back-end would plug
//! into without changing the sampler around it.

/// Returns the index, within `window`, of its smallest element. Ties break
/// to the smallest index; callers rely on this for leftmost tie-break.
pub trait MinReducer {
    fn argmin(window: &[u64]) -> usize;
}

/// Plain linear scan. Flat and branch-predictable; a compiler can usually
/// auto-vectorize this loop on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarScan;

impl MinReducer for ScalarScan {
    fn argmin(window: &[u64]) -> usize {
        let mut min_idx = 0;
        let mut min_val = window[0];
        for (i, &v) in window.iter().enumerate().skip(1) {
            if v < min_val {
                min_val = v;
                min_idx = i;
            }
        }
        min_idx
    }
}

/// Branchless predicated scan: every comparison becomes an unconditional
/// select, so the loop carries no data-dependent branches.
#[derive(Debug, Default, Clone, Copy)]
pub struct Predication;

impl MinReducer for Predication {
    fn argmin(window: &[u64]) -> usize {
        let mut min_idx = 0usize;
        let mut min_val = window[0];
        for (i, &v) in window.iter().enumerate().skip(1) {
            let cond = v < min_val;
            min_val = if cond { v } else { min_val };
            min_idx = if cond { i } else { min_idx };
        }
        min_idx
    }
}
