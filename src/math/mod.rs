pub use std::f64::consts::*;

pub use self::{consts::*, types::*};

mod consts {
    use super::types::*;

    pub const C_ONE: C = C { re: 1., im: 0. };
    pub const C_ZERO: C = C { re: 0., im: 0. };
    pub const C_IMAG: C = C { re: 0., im: 1. };

    pub const I_POW_TABLE: [C; 4] = [
        C { re: 1., im: 0. },
        C { re: 0., im: 1. },
        C { re: -1., im: 0. },
        C { re: 0., im: -1. },
    ];
}

mod types {
    pub type N = usize;

    pub type R = f64;
    pub type C = num_complex::Complex<R>;

    /// Dense row-major unitary for a 1-qubit gate.
    pub type M1 = [C; 4];
    /// Dense row-major unitary for a 2-qubit gate.
    pub type M2 = [C; 16];
    /// Dense row-major unitary for a 3-qubit gate.
    pub type M3 = [C; 64];
}

/// Euler phase factor `e^{i*rad}`.
#[inline]
pub fn phase_from_rad(rad: R) -> C {
    C::from_polar(1.0, rad)
}
