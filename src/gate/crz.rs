use crate::{
    error::EngineResult,
    math::{C, N, R},
};

use super::rz;

/// Controlled-`RZ(theta)`: applies [`RZ`](rz) to local slots 2 and 3.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    inner: rz::Op,
}

impl Op {
    pub const ARITY: N = 2;
    pub const PARAM_COUNT: N = 1;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_len("CRZ", params, 1)?;
        Ok(Op {
            inner: rz::Op::construct(params)?,
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "CRZ"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let o = C::new(0.0, 0.0);
        let i = C::new(1.0, 0.0);
        let inner = super::GateOp::matrix(&self.inner);
        #[rustfmt::skip]
        let m = vec![
            i, o, o, o,
            o, i, o, o,
            o, o, inner[0], inner[1],
            o, o, inner[2], inner[3],
        ];
        m
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        super::GateOp::apply(&self.inner, state, &idx[2..4]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{apply_generic, GateOp};
    use crate::math::test_support::c_close;

    #[test]
    fn leaves_control_off_slots_untouched() {
        let op = Op::construct(&[1.1]).unwrap();
        let mut state = vec![C::new(0.1, 0.0), C::new(0.2, 0.0), C::new(0.6, 0.3), C::new(0.8, -0.2)];
        let original = state.clone();
        op.apply(&mut state, &[0, 1, 2, 3]);
        assert_eq!(state[0], original[0]);
        assert_eq!(state[1], original[1]);
        assert_ne!(state[2], original[2]);
    }

    #[test]
    fn matches_generic_matrix_apply() {
        let op = Op::construct(&[1.1]).unwrap();
        let matrix = op.matrix();

        let mut specialized = vec![C::new(0.1, 0.0), C::new(0.2, 0.0), C::new(0.6, 0.3), C::new(0.8, -0.2)];
        let mut generic = specialized.clone();
        op.apply(&mut specialized, &[0, 1, 2, 3]);
        apply_generic(&matrix, &mut generic, &[0, 1, 2, 3]);

        for (a, b) in specialized.iter().zip(&generic) {
            assert!(c_close(*a, *b, 1e-12));
        }
    }

    #[test]
    fn inverse_rotation_is_identity() {
        let fwd = Op::construct(&[std::f64::consts::FRAC_PI_2]).unwrap();
        let bwd = Op::construct(&[-std::f64::consts::FRAC_PI_2]).unwrap();
        let mut state = vec![C::new(0.1, 0.0), C::new(0.2, 0.0), C::new(0.6, 0.2), C::new(0.8, -0.1)];
        let original = state.clone();

        fwd.apply(&mut state, &[0, 1, 2, 3]);
        bwd.apply(&mut state, &[0, 1, 2, 3]);

        for (a, b) in state.iter().zip(&original) {
            assert!(c_close(*a, *b, 1e-12));
        }
    }
}
