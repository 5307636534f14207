use crate::{
    error::EngineResult,
    math::{C, N, R},
};

/// `SWAP`: exchanges the two wires' state. Swaps local slots 1 (`|01>`) and
/// 2 (`|10>`); `|00>` and `|11>` are fixed points.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op;

impl Op {
    pub const ARITY: N = 2;
    pub const PARAM_COUNT: N = 0;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_empty("SWAP", params)?;
        Ok(Op)
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "SWAP"
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
            o, o, i, o,
            o, i, o, o,
            o, o, o, i,
        ];
        m
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        state.swap(idx[1], idx[2]);
    }
}
