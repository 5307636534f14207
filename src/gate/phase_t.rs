use crate::{
    error::EngineResult,
    math::{phase_from_rad, C, FRAC_PI_4, N, R},
};

/// `T` gate, fourth root of `PauliZ`: `T|0> = |0>`, `T|1> = e^{i*pi/4}|1>`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    phase: C,
}

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 0;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_empty("T", params)?;
        Ok(Op {
            phase: phase_from_rad(FRAC_PI_4),
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "T"
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
