use crate::{
    error::EngineResult,
    math::{phase_from_rad, C, N, R},
};

/// `Rot(phi, theta, omega)`: general single-qubit rotation, the `RZ(omega) *
/// RY(theta) * RZ(phi)` Euler product.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Op {
    e00: C,
    e01: C,
    e10: C,
    e11: C,
}

impl Op {
    pub const ARITY: N = 1;
    pub const PARAM_COUNT: N = 3;

    pub fn construct(params: &[R]) -> EngineResult<Self> {
        super::params::expect_len("Rot", params, 3)?;
        let (phi, theta, omega) = (params[0], params[1], params[2]);
        let cos = (theta / 2.0).cos();
        let sin = (theta / 2.0).sin();

        Ok(Op {
            e00: phase_from_rad(-(phi + omega) / 2.0) * cos,
            e01: -phase_from_rad((phi - omega) / 2.0) * sin,
            e10: phase_from_rad(-(phi - omega) / 2.0) * sin,
            e11: phase_from_rad((phi + omega) / 2.0) * cos,
        })
    }
}

impl super::GateOp for Op {
    fn label(&self) -> &'static str {
        "Rot"
    }

    fn arity(&self) -> N {
        Self::ARITY
    }

    fn matrix(&self) -> Vec<C> {
        vec![self.e00, self.e01, self.e10, self.e11]
    }

    fn apply(&self, state: &mut [C], idx: &[N]) {
        let a = state[idx[0]];
        let b = state[idx[1]];
        state[idx[0]] = self.e00 * a + self.e01 * b;
        state[idx[1]] = self.e10 * a + self.e11 * b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{apply_generic, GateOp};
    use crate::math::test_support::{c_close, is_unitary};

    #[test]
    fn matches_generic_matrix_apply() {
        let op = Op::construct(&[0.3, 1.1, -0.7]).unwrap();
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
    fn matrix_is_unitary() {
        let op = Op::construct(&[0.3, 1.1, -0.7]).unwrap();
        assert!(is_unitary(&op.matrix(), 2, 1e-10));
    }

    #[test]
    fn reduces_to_rz_when_theta_is_zero() {
        use crate::gate::rz;
        let rot = Op::construct(&[0.0, 0.0, 0.9]).unwrap();
        let rz = rz::Op::construct(&[0.9]).unwrap();

        let mut a = vec![C::new(0.6, 0.2), C::new(0.8, -0.1)];
        let mut b = a.clone();

        GateOp::apply(&rot, &mut a, &[0, 1]);
        GateOp::apply(&rz, &mut b, &[0, 1]);

        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).norm() < 1e-10);
        }
    }
}
