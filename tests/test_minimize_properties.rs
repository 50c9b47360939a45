#[cfg(test)]
mod tests {
    use minimizer_bench::driver::{minimize, Algorithm, MinimizeArgs};
    use minimizer_bench::hash::{NtHasher, ThomasWangHasher};
    use minimizer_bench::{Hasher, PackedSequence};

    const THOMAS_WANG_SAMPLERS: [Algorithm; 6] = [
        Algorithm::Naive,
        Algorithm::Deque,
        Algorithm::InplaceDeque,
        Algorithm::ArgMin,
        Algorithm::ArgMinRecovery,
        Algorithm::SplitWindow,
    ];

    /* --------------------------------------------------------------------- */
    /*  reference agreement                                                 */
    /* --------------------------------------------------------------------- */

    #[test]
    fn reference_agreement_across_small_k_and_w() {
        for k in 1..=16_i32 {
            for w in 1..=16_i32 {
                let n = (w + k + 20) as u64;
                let seq = PackedSequence::from_mt19937_64(n, 7);
                let args = MinimizeArgs {
                    seq: &seq,
                    window_length: w,
                    kmer_length: k,
                };
                let reference = minimize(&args, Algorithm::Naive);
                for &alg in &THOMAS_WANG_SAMPLERS {
                    assert_eq!(
                        minimize(&args, alg),
                        reference,
                        "k={k} w={w} alg={}",
                        alg.name()
                    );
                }
            }
        }
    }

    /* --------------------------------------------------------------------- */
    /*  hasher independence within a hasher family                         */
    /* --------------------------------------------------------------------- */

    #[test]
    fn hasher_families_agree_within_themselves() {
        let seq = PackedSequence::from_mt19937_64(4096, 42);
        let args = MinimizeArgs {
            seq: &seq,
            window_length: 11,
            kmer_length: 21,
        };

        assert_eq!(
            minimize(&args, Algorithm::NtHashArgMin),
            minimize(&args, Algorithm::NtHashArgMinRecovery)
        );
        assert_eq!(
            minimize(&args, Algorithm::ArgMin),
            minimize(&args, Algorithm::SplitWindow)
        );
    }

    /* --------------------------------------------------------------------- */
    /*  deduplication                                                      */
    /* --------------------------------------------------------------------- */

    #[test]
    fn consecutive_entries_never_share_a_position() {
        let seq = PackedSequence::from_mt19937_64(50_000, 3);
        for alg in Algorithm::ALL {
            let args = MinimizeArgs {
                seq: &seq,
                window_length: 9,
                kmer_length: 17,
            };
            let out = minimize(&args, alg);
            for pair in out.windows(2) {
                assert_ne!(
                    pair[0].position,
                    pair[1].position,
                    "{} emitted a duplicate position",
                    alg.name()
                );
            }
        }
    }

    /* --------------------------------------------------------------------- */
    /*  density lower bound                                                */
    /* --------------------------------------------------------------------- */

    #[test]
    fn density_matches_classical_lower_bound() {
        let w = 11;
        let k = 21;
        let n = 200_000u64;
        let seq = PackedSequence::from_mt19937_64(n, 11);
        let args = MinimizeArgs {
            seq: &seq,
            window_length: w,
            kmer_length: k,
        };
        let out = minimize(&args, Algorithm::Naive);
        let lower_bound = (n as i64 / w as i64) - 10;
        assert!(
            out.len() as i64 >= lower_bound,
            "density too low: {} entries, expected at least {lower_bound}",
            out.len()
        );
    }

    /* --------------------------------------------------------------------- */
    /*  ntHash rolling identity                                            */
    /* --------------------------------------------------------------------- */

    #[test]
    fn nthash_rolling_matches_from_scratch_at_spot_checks() {
        let n = 1_000_000u64;
        let k = 21;
        let seq = PackedSequence::from_mt19937_64(n, 42);
        let hasher = NtHasher::new();
        let rolled = hasher.hash(&seq, k);

        let spots = [0usize, 1, k as usize, 2 * k as usize, (n / 2) as usize, (n - k as u64) as usize];
        for &i in &spots {
            if i >= rolled.len() {
                continue;
            }
            let from_scratch = hasher.hash_one_from_scratch(&seq, i as u64, k);
            assert_eq!(rolled[i], from_scratch, "mismatch at k-mer start {i}");
        }
    }

    /* --------------------------------------------------------------------- */
    /*  short-sequence boundary                                            */
    /* --------------------------------------------------------------------- */

    #[test]
    fn boundary_below_and_at_threshold() {
        let w = 5;
        let k = 15;

        let below = PackedSequence::from_mt19937_64((w + k - 2) as u64, 1);
        let at_boundary = PackedSequence::from_mt19937_64((w + k - 1) as u64, 1);

        for alg in Algorithm::ALL {
            let below_args = MinimizeArgs {
                seq: &below,
                window_length: w,
                kmer_length: k,
            };
            assert!(minimize(&below_args, alg).is_empty());

            let boundary_args = MinimizeArgs {
                seq: &at_boundary,
                window_length: w,
                kmer_length: k,
            };
            assert_eq!(minimize(&boundary_args, alg).len(), 1);
        }
    }

    /* --------------------------------------------------------------------- */
    /*  sequence decoding round-trip                                       */
    /* --------------------------------------------------------------------- */

    #[test]
    fn decode_and_reverse_complement_round_trip() {
        let seq = PackedSequence::from_mt19937_64(4096, 99);
        for i in 0..seq.len() {
            assert!(seq.code(i) <= 3);
            assert_eq!(seq.reverse_code(i), seq.code(seq.len() - 1 - i) ^ 3);
        }
    }

    /* --------------------------------------------------------------------- */
    /*  concrete seed scenarios                                             */
    /* --------------------------------------------------------------------- */

    #[test]
    fn seed_scenario_n16384_k15_w5() {
        let seq = PackedSequence::from_mt19937_64(16384, 42);
        let args = MinimizeArgs {
            seq: &seq,
            window_length: 5,
            kmer_length: 15,
        };
        let reference = minimize(&args, Algorithm::Naive);
        for &alg in &THOMAS_WANG_SAMPLERS {
            assert_eq!(minimize(&args, alg), reference, "alg={}", alg.name());
        }
        assert!(reference.len() as f64 >= 16384.0 / 5.0 - 10.0);
        for pair in reference.iter().take(3).zip(reference.iter().skip(1).take(3)) {
            assert_ne!(pair.0.position, pair.1.position);
        }
    }

    #[test]
    fn seed_scenario_n1024_k21_w11() {
        let seq = PackedSequence::from_mt19937_64(1024, 42);
        let args = MinimizeArgs {
            seq: &seq,
            window_length: 11,
            kmer_length: 21,
        };
        let reference = minimize(&args, Algorithm::Naive);
        for &alg in &THOMAS_WANG_SAMPLERS {
            assert_eq!(minimize(&args, alg), reference, "alg={}", alg.name());
        }
        assert!(reference.len() as f64 >= 1024.0 / 11.0 - 5.0);
    }

    #[test]
    fn seed_scenario_n20_k15_w5() {
        let seq = PackedSequence::from_mt19937_64(20, 1);
        let args = MinimizeArgs {
            seq: &seq,
            window_length: 5,
            kmer_length: 15,
        };
        let reference = minimize(&args, Algorithm::Naive);
        assert!(reference.len() <= 2);
        for &alg in &THOMAS_WANG_SAMPLERS {
            assert_eq!(minimize(&args, alg), reference, "alg={}", alg.name());
        }
    }

    #[test]
    fn seed_scenario_n18_k15_w5_is_the_empty_boundary() {
        // n = w + k - 2 = 18: one base short of the w+k-1 threshold.
        let seq = PackedSequence::from_mt19937_64(18, 1);
        let args = MinimizeArgs {
            seq: &seq,
            window_length: 5,
            kmer_length: 15,
        };
        for alg in Algorithm::ALL {
            assert!(minimize(&args, alg).is_empty(), "{} should be empty", alg.name());
        }
    }

    #[test]
    fn seed_scenario_stress_n1000000_k21_w11() {
        let n = 1_000_000u64;
        let seq = PackedSequence::from_mt19937_64(n, 42);
        let args = MinimizeArgs {
            seq: &seq,
            window_length: 11,
            kmer_length: 21,
        };
        let reference = minimize(&args, Algorithm::Naive);
        for &alg in &THOMAS_WANG_SAMPLERS {
            assert_eq!(minimize(&args, alg), reference, "alg={}", alg.name());
        }

        let hasher = NtHasher::new();
        let rolled = hasher.hash(&seq, 21);
        for &i in &[0usize, 1, 21, 42, (n / 2) as usize, (n - 21) as usize] {
            assert_eq!(rolled[i], hasher.hash_one_from_scratch(&seq, i as u64, 21));
        }
    }

    /* --------------------------------------------------------------------- */
    /*  thomas-wang sanity                                                  */
    /* --------------------------------------------------------------------- */

    #[test]
    fn thomas_wang_hash_is_deterministic() {
        let seq = PackedSequence::from_bytes(b"ACGTACGTACGTACGTACGT");
        let hasher = ThomasWangHasher;
        let a = hasher.hash(&seq, 10);
        let b = hasher.hash(&seq, 10);
        assert_eq!(a, b);
    }
}
