//! Rolling ntHash: canonical per-base seeds, a bit-interleaved rotation
//! (`srol`), and a precomputed 32x4 rotation table for the rolling step.

use super::Hasher;
use crate::sequence::PackedSequence;

/// ntHash's published canonical seeds, one per base code `{0,1,2,3}`.
const SEEDS: [u64; 4] = [
    0x3c8b_fbb3_95c6_0470, // A
    0x3193_c185_62a0_2b4c, // C
    0x2032_3ed0_8257_2324, // G
    0x2d2a_04e6_7531_0c18, // T
];

const MAX_K: usize = 33;

/// Rotate `x` left by 1 bit inside each of the two 33-bit halves of a
/// 66-bit conceptual word. The mask `0xFFFFFFFDFFFFFFFF` and the two
/// displaced bits at positions 63 and 32 are load-bearing.
#[inline(always)]
fn srol(x: u64) -> u64 {
    let m = ((x & 0x8000_0000_0000_0000) >> 30) | ((x & 0x1_0000_0000) >> 32);
    ((x << 1) & 0xFFFF_FFFD_FFFF_FFFF) | m
}

/// Compose `n` single-bit rotations; used only at table-build time.
fn srol_n(mut x: u64, n: u32) -> u64 {
    for _ in 0..n {
        x = srol(x);
    }
    x
}

/// `table[k][base]` == `srol(SEEDS[base], k)`, precomputed once for
/// `k in 0..=32`.
fn build_table() -> [[u64; 4]; MAX_K] {
    let mut table = [[0u64; 4]; MAX_K];
    for (k, row) in table.iter_mut().enumerate() {
        for (b, seed) in SEEDS.iter().enumerate() {
            row[b] = srol_n(*seed, k as u32);
        }
    }
    table
}

/// Rolling ntHash over a [`PackedSequence`], with canonical per-base seeds
/// and a precomputed rotation table.
#[derive(Debug, Clone)]
pub struct NtHasher {
    table: [[u64; 4]; MAX_K],
}

impl Default for NtHasher {
    fn default() -> Self {
        Self {
            table: build_table(),
        }
    }
}

impl NtHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// `h' = srol(h) ^ srol(seed[b_out], k) ^ seed[b_in]`, the rolling
    /// update from window `[i-1, i+k-1)` to `[i, i+k)`.
    #[inline(always)]
    fn roll(&self, h: u64, base_out: u8, base_in: u8, k: i32) -> u64 {
        srol(h) ^ self.table[k as usize][base_out as usize] ^ SEEDS[base_in as usize]
    }

    /// `h = srol(seed[b0], k-1) ^ srol(seed[b1], k-2) ^ ... ^ seed[b_{k-1}]`,
    /// computed from scratch over `[start, start+k)`. Exposed for spot-checks
    /// against the rolling form; `hash` never calls this past position 0.
    pub fn hash_one_from_scratch(&self, seq: &PackedSequence, start: u64, k: i32) -> u64 {
        let mut h = 0u64;
        for j in 0..k as u64 {
            let base = seq.code(start + j);
            let r = (k as u64 - 1 - j) as u32;
            h ^= srol_n(SEEDS[base as usize], r);
        }
        h
    }
}

impl Hasher for NtHasher {
    fn hash(&self, seq: &PackedSequence, k: i32) -> Vec<u64> {
        let n = seq.len();
        let ku = k as u64;
        if n < ku {
            return Vec::new();
        }

        let mut out = Vec::with_capacity((n - ku + 1) as usize);
        let mut h = self.hash_one_from_scratch(seq, 0, k);
        out.push(h);

        for i in ku..n {
            let base_out = seq.code(i - ku);
            let base_in = seq.code(i);
            h = self.roll(h, base_out, base_in, k);
            out.push(h);
        }

        out
    }
}
