use crate::{
    error::EngineResult,
    math::{C, N, R},
};

/// `S` gate, square root of `PauliZ`: `S|0> = |0>`, `S|1> = i|1>`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op;

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 0;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_empty("S", params)?;
        Ok(Op)
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "S"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let o = C::new(0.0, 0.0);
        let i = C::new(1.0, 0.0);
        vec![i, o, o, C::new(0.0, 1.0)]
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        let b = state[idx[1]];
        state[idx[1]] = C::new(-b.im, b.re);
    }
}
