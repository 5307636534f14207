use crate::{
    error::EngineResult,
    math::{C, N, R},
};

/// Controlled-`X`: flips the target (wire 1) when the control (wire 0) is
/// set. Local basis order is `|control, target>`, so this swaps slots 2
/// (`|10>`) and 3 (`|11>`).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op;

impl Op {
    pub const ARITY: N = 2;
    pub const PARAM_COUNT: N = 0;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_empty("CNOT", params)?;
        Ok(Op)
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "CNOT"
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
            o, o, o, i,
            o, o, i, o,
        ];
        m
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        state.swap(idx[2], idx[3]);
    }
}
