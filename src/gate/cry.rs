use crate::{
    error::EngineResult,
    math::{C, N, R},
};

use super::ry;

/// Controlled-`RY(theta)`: applies [`RY`](ry) to local slots 2 and 3.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    inner: ry::Op,
}

impl Op {
    pub const ARITY: N = 2;
    pub const PARAM_COUNT: N = 1;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_len("CRY", params, 1)?;
        Ok(Op {
            inner: ry::Op::construct(params)?,
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "CRY"
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
