use crate::{
    error::EngineResult,
    math::{C, N, R},
};

/// Controlled-`Z`: negates the amplitude of local slot 3 (`|11>`) only.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op;

impl Op {
    pub const ARITY: N = 2;
    pub const PARAM_COUNT: N = 0;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_empty("CZ", params)?;
        Ok(Op)
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "CZ"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let o = C::new(0.0, 0.0);
        let i = C::new(1.0, 0.0);
        #[rustfmt::skip]
        let m = vec![
            i, o, o, o,
            o, i, o, o,
            o, o, i, o,
            o, o, o, -i,
        ];
        m
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        state[idx[3]] = -state[idx[3]];
    }
}
