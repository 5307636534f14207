use crate::{
    error::EngineResult,
    math::{C, N, R},
};

/// `RX(theta)`: rotation by `theta` radians around the X axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    cos: R,
    neg_i_sin: C,
}

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 1;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_len("RX", params, 1)?;
        let half = params[0] / 2.0;
        Ok(Op {
            cos: half.cos(),
            neg_i_sin: C::new(0.0, -half.sin()),
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "RX"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let cos = C::new(self.cos, 0.0);
        vec![cos, self.neg_i_sin, self.neg_i_sin, cos]
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        let a = state[idx[0]];
        let b = state[idx[1]];
        state[idx[0]] = a.scale(self.cos) + self.neg_i_sin * b;
        state[idx[1]] = self.neg_i_sin * a + b.scale(self.cos);
    }
}
