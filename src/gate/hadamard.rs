use crate::math::{C, FRAC_1_SQRT_2, N, R};
use crate::error::EngineResult;

/// Hadamard gate: `H|0> = (|0> + |1>)/sqrt(2)`, `H|1> = (|0> - |1>)/sqrt(2)`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op;

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 0;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_empty("Hadamard", params)?;
        Ok(Op)
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "Hadamard"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        let s = C::new(FRAC_1_SQRT_2, 0.0);
        vec![s, s, s, -s]
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        let a = state[idx[0]];
        let b = state[idx[1]];
        state[idx[0]] = (a + b).scale(FRAC_1_SQRT_2);
        state[idx[1]] = (a - b).scale(FRAC_1_SQRT_2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{apply_generic, GateOp};
    use crate::math::test_support::c_close;

    #[test]
    fn matches_generic_matrix_apply() {
        let op = Op::construct(&[]).unwrap();
        let matrix = op.matrix();

        let mut specialized = vec![C::new(0.6, 0.3), C::new(0.8, -0.2)];
        let mut generic = specialized.clone();
        op.apply(&mut specialized, &[0, 1]);
        apply_generic(&matrix, &mut generic, &[0, 1]);

        for (a, b) in specialized.iter().zip(&generic) {
            assert!(c_close(*a, *b, 1e-12));
        }
    }

    #[test]
    fn creates_equal_superposition() {
        let op = Op::construct(&[]).unwrap();
        let mut state = vec![C::new(1.0, 0.0), C::new(0.0, 0.0)];
        op.apply(&mut state, &[0, 1]);
        assert!(c_close(state[0], C::new(FRAC_1_SQRT_2, 0.0), 1e-12));
        assert!(c_close(state[1], C::new(FRAC_1_SQRT_2, 0.0), 1e-12));
    }

    #[test]
    fn is_self_inverse() {
        let op = Op::construct(&[]).unwrap();
        let mut state = vec![C::new(0.6, 0.1), C::new(0.8, -0.2)];
        let original = state.clone();
        op.apply(&mut state, &[0, 1]);
        op.apply(&mut state, &[0, 1]);
        for (a, b) in state.iter().zip(&original) {
            assert!(c_close(*a, *b, 1e-12));
        }
    }
}
