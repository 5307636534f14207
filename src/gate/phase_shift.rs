use crate::{
    error::EngineResult,
    math::{phase_from_rad, C, N, R},
};

/// `PhaseShift(phi)`: multiplies the `|1>` amplitude by `e^{i*phi}`.
/// Differs from [`RZ`](super::rz) by omitting the global phase.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    phase: C,
}

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 1;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_len("PhaseShift", params, 1)?;
        Ok(Op {
            phase: phase_from_rad(params[0]),
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "PhaseShift"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let o = C::new(0.0, 0.0);
        let i = C::new(1.0, 0.0);
        vec![i, o, o, self.phase]
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        state[idx[1]] *= self.phase;
    }
}
