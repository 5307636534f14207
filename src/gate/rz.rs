use crate::{
    error::EngineResult,
    math::{phase_from_rad, C, N, R},
};

/// `RZ(theta)`: rotation by `theta` radians around the Z axis. Diagonal.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    neg_half: C,
    pos_half: C,
}

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 1;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_len("RZ", params, 1)?;
        let half = params[0] / 2.0;
        Ok(Op {
            neg_half: phase_from_rad(-half),
            pos_half: phase_from_rad(half),
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "RZ"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let o = C::new(0.0, 0.0);
        vec![self.neg_half, o, o, self.pos_half]
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        state[idx[0]] *= self.neg_half;
        state[idx[1]] *= self.pos_half;
    }
}
