use crate::{
    error::EngineResult,
    math::{C, N, R},
};

/// `RY(theta)`: rotation by `theta` radians around the Y axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    cos: R,
    sin: R,
}

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 1;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_len("RY", params, 1)?;
        let half = params[0] / 2.0;
        Ok(Op {
            cos: half.cos(),
            sin: half.sin(),
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "RY"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let cos = C::new(self.cos, 0.0);
        let sin = C::new(self.sin, 0.0);
        vec![cos, -sin, sin, cos]
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        let a = state[idx[0]];
        let b = state[idx[1]];
        state[idx[0]] = a.scale(self.cos) - b.scale(self.sin);
        state[idx[1]] = a.scale(self.sin) + b.scale(self.cos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{apply_generic, GateOp};
    use crate::math::test_support::c_close;

    #[test]
    fn matches_generic_matrix_apply() {
        let op = Op::construct(&[0.42]).unwrap();
        let matrix = op.matrix();

        let mut specialized = vec![C::new(0.6, 0.3), C::new(0.8, -0.1)];
        let mut generic = specialized.clone();
        op.apply(&mut specialized, &[0, 1]);
        apply_generic(&matrix, &mut generic, &[0, 1]);

        for (a, b) in specialized.iter().zip(&generic) {
            assert!(c_close(*a, *b, 1e-12));
        }
    }

    #[test]
    fn inverse_rotation_is_identity() {
        let fwd = Op::construct(&[0.5]).unwrap();
        let bwd = Op::construct(&[-0.5]).unwrap();
        let mut state = vec![C::new(0.6, 0.2), C::new(0.8, -0.1)];
        let original = state.clone();

        fwd.apply(&mut state, &[0, 1]);
        bwd.apply(&mut state, &[0, 1]);

        for (a, b) in state.iter().zip(&original) {
            assert!(c_close(*a, *b, 1e-12));
        }
    }
}
