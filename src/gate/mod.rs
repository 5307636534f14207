//! The gate catalogue: one module per gate, a closed dispatch enum, and the
//! generic gather/apply/scatter fallback used to cross-check every
//! specialized kernel.
//!
//! Each gate lives in its own file and implements a single trait, dispatched
//! through a closed `enum_dispatch` enum rather than a trait object.

use crate::math::{C, N};

mod cnot;
mod crot;
mod crx;
mod cry;
mod crz;
mod cswap;
mod cz;
mod dispatch;
mod hadamard;
mod phase_s;
mod phase_shift;
mod phase_t;
mod params;
mod pauli_x;
mod pauli_y;
mod pauli_z;
mod rot;
mod rx;
mod ry;
mod rz;
mod swap;
mod toffoli;

pub use dispatch::{GateEntry, GateKind, GateOp, lookup};

/// Gather-then-scatter application of a dense `2^k x 2^k` row-major unitary.
///
/// `idx` must already be the `2^k` absolute offsets for one iteration (the
/// complement offset added to each kernel offset). The gather into `tmp` is
/// completed in full before any element of `state` is written, so this
/// function is safe to use even when `state[idx[i]]` aliases one of the rows
/// being summed: scattering before every gather completes would read
/// already-overwritten amplitudes for non-diagonal gates.
pub fn apply_generic(matrix: &[C], state: &mut [C], idx: &[N]) {
    let k = idx.len();
    debug_assert_eq!(matrix.len(), k * k);

    let mut tmp = [C::new(0.0, 0.0); 8];
    let tmp = &mut tmp[..k];
    for (t, &i) in tmp.iter_mut().zip(idx) {
        *t = state[i];
    }

    for (row, &i) in idx.iter().enumerate() {
        let mut acc = C::new(0.0, 0.0);
        for (col, &t) in tmp.iter().enumerate() {
            acc += matrix[row * k + col] * t;
        }
        state[i] = acc;
    }
}
