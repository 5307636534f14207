use std::collections::HashMap;

use crate::{
    error::{EngineError, EngineResult},
    math::{C, N, R},
};

pub type PauliX = super::pauli_x::Op;
pub type PauliY = super::pauli_y::Op;
pub type PauliZ = super::pauli_z::Op;
pub type Hadamard = super::hadamard::Op;
pub type S = super::phase_s::Op;
pub type T = super::phase_t::Op;
pub type Rx = super::rx::Op;
pub type Ry = super::ry::Op;
pub type Rz = super::rz::Op;
pub type PhaseShift = super::phase_shift::Op;
pub type Rot = super::rot::Op;
pub type Cnot = super::cnot::Op;
pub type Swap = super::swap::Op;
pub type Cz = super::cz::Op;
pub type Crx = super::crx::Op;
pub type Cry = super::cry::Op;
pub type Crz = super::crz::Op;
pub type CRot = super::crot::Op;
pub type Toffoli = super::toffoli::Op;
pub type CSwap = super::cswap::Op;

/// Capability set every catalogued gate must satisfy: label, arity, dense
/// matrix, and the in-place kernel. Dispatched through [`GateKind`] rather
/// than a trait object, via `enum_dispatch`.
#[enum_dispatch::enum_dispatch(GateKind)]
pub trait GateOp {
    fn label(&self) -> &'static str;

    fn arity(&self) -> N;

    /// Dense row-major `2^arity() x 2^arity()` unitary. Used for auditing,
    /// tests, and as the reference semantics every specialized kernel must
    /// reproduce up to floating-point round-off; not used on the hot path.
    fn matrix(&self) -> Vec<C>;

    /// In-place kernel. `idx` holds the `2^arity()` absolute offsets for one
    /// iteration, already offset by the current complement value.
    fn apply(&self, state: &mut [C], idx: &[N]);
}

#[enum_dispatch::enum_dispatch]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GateKind {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    S,
    T,
    Rx,
    Ry,
    Rz,
    PhaseShift,
    Rot,
    Cnot,
    Swap,
    Cz,
    Crx,
    Cry,
    Crz,
    CRot,
    Toffoli,
    CSwap,
}

/// One entry in the dispatch table: the gate's declared arity and parameter
/// count (known without constructing an instance, so wire-count validation
/// can happen before parameter validation), plus its constructor.
pub struct GateEntry {
    pub arity: N,
    pub param_count: N,
    pub construct: fn(&[R]) -> EngineResult<GateKind>,
}

macro_rules! catalogue {
    ($($label:literal => $ty:ident),+ $(,)?) => {
        fn build_table() -> HashMap<&'static str, GateEntry> {
            let mut table = HashMap::new();
            $(
                table.insert($label, GateEntry {
                    arity: $ty::ARITY,
                    param_count: $ty::PARAM_COUNT,
                    construct: |params| Ok(GateKind::from($ty::construct(params)?)),
                });
            )+
            table
        }
    };
}

catalogue! {
    "PauliX" => PauliX,
    "PauliY" => PauliY,
    "PauliZ" => PauliZ,
    "Hadamard" => Hadamard,
    "S" => S,
    "T" => T,
    "RX" => Rx,
    "RY" => Ry,
    "RZ" => Rz,
    "PhaseShift" => PhaseShift,
    "Rot" => Rot,
    "CNOT" => Cnot,
    "SWAP" => Swap,
    "CZ" => Cz,
    "CRX" => Crx,
    "CRY" => Cry,
    "CRZ" => Crz,
    "CRot" => CRot,
    "Toffoli" => Toffoli,
    "CSWAP" => CSwap,
}

lazy_static::lazy_static! {
    static ref DISPATCH: HashMap<&'static str, GateEntry> = build_table();
}

/// Resolves a gate label to its dispatch-table entry. Resolution is
/// constant-time; the table is built once, lazily, at first use, and never
/// mutated afterward.
pub fn lookup(label: &str) -> EngineResult<&'static GateEntry> {
    DISPATCH
        .get(label)
        .ok_or_else(|| EngineError::UnknownGate(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalogued_label_resolves() {
        for label in [
            "PauliX", "PauliY", "PauliZ", "Hadamard", "S", "T", "RX", "RY", "RZ", "PhaseShift",
            "Rot", "CNOT", "SWAP", "CZ", "CRX", "CRY", "CRZ", "CRot", "Toffoli", "CSWAP",
        ] {
            assert!(lookup(label).is_ok(), "{label} should resolve");
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(
            lookup("Bogus").unwrap_err(),
            EngineError::UnknownGate("Bogus".to_string())
        );
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!(lookup("paulix").is_err());
        assert!(lookup("hadamard").is_err());
    }
}
