//! The engine's single entry point: validates, constructs, and applies a
//! list of [`Operation`]s to a state vector in place.

use crate::{
    error::{EngineError, EngineResult},
    gate::{self, GateOp},
    index::{generate_bit_patterns, get_indices_excluding},
    math::{C, N, R},
};

/// One `(label, wires, params)` triple. The bridge that gathers these from
/// four parallel host-side sequences is out of scope here; callers construct
/// `Operation` values directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub label: String,
    pub wires: Vec<N>,
    pub params: Vec<R>,
}

impl Operation {
    pub fn new(label: impl Into<String>, wires: Vec<N>, params: Vec<R>) -> Self {
        Operation {
            label: label.into(),
            wires,
            params,
        }
    }
}

/// Applies every operation in `ops`, in order, to `state`. `state` must have
/// length exactly `2^n`.
///
/// On the first validation failure, `apply` aborts: `state` is left exactly
/// as the last fully-completed operation left it, and no part of the failing
/// operation is applied.
pub fn apply(state: &mut [C], n: N, ops: &[Operation]) -> EngineResult<()> {
    let expected_len = 1usize << n;
    if state.len() != expected_len {
        return Err(EngineError::BadBufferLength {
            expected: expected_len,
            got: state.len(),
        });
    }

    for op in ops {
        apply_one(state, n, op)?;
    }

    Ok(())
}

fn apply_one(state: &mut [C], n: N, op: &Operation) -> EngineResult<()> {
    let entry = gate::lookup(&op.label)?;

    if op.wires.len() != entry.arity {
        return Err(EngineError::BadWireCount {
            label: op.label.clone(),
            expected: entry.arity,
            got: op.wires.len(),
        });
    }
    check_distinct(&op.wires)?;
    for &w in &op.wires {
        if w >= n {
            return Err(EngineError::WireOutOfRange { wire: w, n });
        }
    }
    if op.params.len() != entry.param_count {
        return Err(EngineError::BadParameterCount {
            label: op.label.clone(),
            expected: entry.param_count,
            got: op.params.len(),
        });
    }

    let kind = (entry.construct)(&op.params)?;

    let k = generate_bit_patterns(&op.wires, n);
    let complement_wires = get_indices_excluding(&op.wires, n)?;
    let c = generate_bit_patterns(&complement_wires, n);

    let mut idx = vec![0usize; k.len()];
    for offset in c {
        for (slot, &ki) in k.iter().enumerate() {
            idx[slot] = offset + ki;
        }
        kind.apply(state, &idx);
    }

    Ok(())
}

fn check_distinct(wires: &[N]) -> EngineResult<()> {
    for i in 0..wires.len() {
        for j in (i + 1)..wires.len() {
            if wires[i] == wires[j] {
                return Err(EngineError::DuplicateWire { wire: wires[i] });
            }
        }
    }
    Ok(())
}
