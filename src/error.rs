//! Error taxonomy for the gate-application engine.
//!
//! Every variant reported here aborts the current [`apply`](crate::apply)
//! call synchronously; none is recovered internally. Errors carry enough
//! context to explain themselves without a second lookup into the operation
//! list.

use std::fmt;

use crate::math::N;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A gate label was not present in the dispatch table.
    UnknownGate(String),
    /// A gate's parameter list did not have the declared length.
    BadParameterCount {
        label: String,
        expected: N,
        got: N,
    },
    /// A gate's wire list did not have the declared arity.
    BadWireCount {
        label: String,
        expected: N,
        got: N,
    },
    /// A wire index was `>= n`.
    WireOutOfRange { wire: N, n: N },
    /// The same wire index appeared twice in one operation.
    DuplicateWire { wire: N },
    /// The state buffer length was not exactly `2^n`.
    BadBufferLength { expected: N, got: N },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownGate(label) => write!(f, "unknown gate label {label:?}"),
            EngineError::BadParameterCount { label, expected, got } => write!(
                f,
                "gate {label:?} expects {expected} parameter(s), got {got}"
            ),
            EngineError::BadWireCount { label, expected, got } => write!(
                f,
                "gate {label:?} expects {expected} wire(s), got {got}"
            ),
            EngineError::WireOutOfRange { wire, n } => {
                write!(f, "wire {wire} is out of range for a {n}-qubit state")
            }
            EngineError::DuplicateWire { wire } => {
                write!(f, "wire {wire} appears twice in the same operation")
            }
            EngineError::BadBufferLength { expected, got } => write!(
                f,
                "state buffer has length {got}, expected 2^n = {expected}"
            ),
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;
