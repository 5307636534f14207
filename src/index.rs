//! Pure index arithmetic mapping a gate's wires to amplitude offsets.
//!
//! These two functions are the whole of the "index generator" component:
//! everything else in the crate either constructs wire lists to feed them or
//! consumes the offsets they produce. Both are pure and allocate only their
//! return value.

use crate::{error::EngineError, math::N};

/// Ascending sequence of indices in `[0, n)` that are not present in
/// `excluded`. Duplicates in `excluded` are tolerated (treated as set union).
///
/// Fails with [`EngineError::WireOutOfRange`] if any entry of `excluded` is
/// `>= n`.
pub fn get_indices_excluding(excluded: &[N], n: N) -> Result<Vec<N>, EngineError> {
    for &w in excluded {
        if w >= n {
            return Err(EngineError::WireOutOfRange { wire: w, n });
        }
    }

    Ok((0..n).filter(|i| !excluded.contains(i)).collect())
}

/// Offsets a `k`-wire gate reads/writes, for every local basis state.
///
/// `wires` is ordered: `wires[0]` is the gate's "first" qubit, mapping to the
/// most significant bit of the local `2^k` index; `wires[k - 1]` maps to the
/// least significant bit. The wire-to-bit mapping within the full `2^n`
/// amplitude buffer is big-endian: wire `0` is the buffer's most significant
/// bit, wire `n - 1` its least significant.
///
/// For output index `p` with binary representation `b_{k-1} b_{k-2} … b_0`,
/// the returned value is `Σ_j b_j · 2^(n-1-wires[k-1-j])` (wires are
/// consumed last-to-first as bits go least-to-most significant). This
/// (non-obvious) convention makes the generic gather step
/// `v[i] = state[c + K[i]]` assign local basis state `i` (MSB-first over the
/// gate's wire ordering) to the `i`-th row of the gate matrix, preserving the
/// caller's intended wire ordering.
///
/// Returns a sequence of length `2^wires.len()`.
pub fn generate_bit_patterns(wires: &[N], n: N) -> Vec<N> {
    let k = wires.len();
    let size = 1usize << k;
    let mut out = Vec::with_capacity(size);

    for p in 0..size {
        let mut offset = 0usize;
        for j in 0..k {
            if (p >> j) & 1 != 0 {
                offset += 1usize << (n - 1 - wires[k - 1 - j]);
            }
        }
        out.push(offset);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluding_is_ascending_complement() {
        assert_eq!(get_indices_excluding(&[1, 3], 5).unwrap(), vec![0, 2, 4]);
        assert_eq!(get_indices_excluding(&[], 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(get_indices_excluding(&[0, 1, 2], 3).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn excluding_tolerates_duplicates() {
        assert_eq!(get_indices_excluding(&[1, 1, 1], 3).unwrap(), vec![0, 2]);
    }

    #[test]
    fn excluding_rejects_out_of_range() {
        let err = get_indices_excluding(&[5], 5).unwrap_err();
        assert_eq!(err, EngineError::WireOutOfRange { wire: 5, n: 5 });
    }

    #[test]
    fn bit_patterns_worked_example_two_wires() {
        assert_eq!(generate_bit_patterns(&[0, 1], 5), vec![0, 8, 16, 24]);
    }

    #[test]
    fn bit_patterns_worked_example_reversed_wires() {
        assert_eq!(generate_bit_patterns(&[1, 0], 5), vec![0, 16, 8, 24]);
    }

    #[test]
    fn bit_patterns_worked_example_single_wire() {
        assert_eq!(generate_bit_patterns(&[2], 5), vec![0, 4]);
    }

    #[test]
    fn bit_patterns_singleton_wire_zero() {
        // Wire 0 is the MSB of the full index for any n.
        assert_eq!(generate_bit_patterns(&[0], 1), vec![0, 1]);
        assert_eq!(generate_bit_patterns(&[0], 3), vec![0, 4]);
    }

    #[test]
    fn decomposition_is_exact_bijection() {
        // For every (wires, n), {c + K[i]} must cover [0, 2^n) exactly once.
        let n = 5;
        for wires in [
            vec![0usize, 1, 2],
            vec![2, 0, 4],
            vec![4, 3, 2, 1, 0],
            vec![3],
        ] {
            let k = generate_bit_patterns(&wires, n);
            let complement = get_indices_excluding(&wires, n).unwrap();
            let c = generate_bit_patterns(&complement, n);

            let mut seen = vec![false; 1 << n];
            for &co in &c {
                for &ko in &k {
                    let idx = co + ko;
                    assert!(!seen[idx], "index {idx} produced twice");
                    seen[idx] = true;
                }
            }
            assert!(seen.into_iter().all(|s| s), "not all indices covered");
        }
    }
}
