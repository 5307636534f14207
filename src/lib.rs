//! A gate-application kernel for dense state-vector quantum simulation.
//!
//! The crate's whole public surface is [`apply`]: given a mutable slice of
//! `2^n` complex amplitudes and an ordered list of [`Operation`]s, it mutates
//! the state in place, gate by gate, left to right.
//!
//! ```rust
//! use num_complex::Complex64;
//! use qsv_kernel::{apply, Operation};
//!
//! // Bell state: Hadamard on wire 0, then CNOT(0 -> 1).
//! let mut state = vec![Complex64::new(0.0, 0.0); 4];
//! state[0] = Complex64::new(1.0, 0.0);
//!
//! let ops = vec![
//!     Operation::new("Hadamard", vec![0], vec![]),
//!     Operation::new("CNOT", vec![0, 1], vec![]),
//! ];
//! apply(&mut state, 2, &ops).unwrap();
//! ```
//!
//! # Wire convention
//!
//! Wires are big-endian against the amplitude index: wire `0` is the most
//! significant bit of the index, wire `n - 1` the least significant. Index
//! `0` is the all-zero basis state, index `2^n - 1` the all-ones state.
//!
//! # Gate catalogue
//!
//! See [`gate`] for the twenty catalogued gates (Pauli, Hadamard, phase,
//! rotation, and their controlled/multi-qubit forms). Labels are
//! case-sensitive and match exactly those the [dispatcher](gate::lookup)
//! recognizes.
//!
//! # Scope
//!
//! This crate applies gates to an amplitude buffer it does not own. It does
//! not measure, sample, normalize, differentiate, or persist state, and it
//! does not parse any circuit description format; callers build
//! [`Operation`] values directly.

#![allow(dead_code)]
#![warn(clippy::cargo)]

pub mod error;
pub mod gate;
pub mod index;
pub mod math;

mod driver;

pub use driver::{apply, Operation};
pub use error::{EngineError, EngineResult};
