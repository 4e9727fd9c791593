//! Mixed-mode builders: real-valued parameters combined with a symbolic one.
//!
//! Fully symbolic inputs need no special entry point, the generic builders in
//! [`rotation`](crate::rotation) and [`transform`](crate::transform) accept
//! [`Expr`] directly.

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::expr::Expr;
use crate::rotation::{axis_rotation_matrix, rx_matrix, rz_matrix};
use crate::scalar::TrigScalar;
use crate::transform::Transform;

/// Rotation about Z by a symbolic angle
pub fn symbolic_rz_matrix(psi: &Expr) -> Matrix3<Expr> {
    rz_matrix(psi.clone())
}

/// Z-X-Z Euler rotation where only `psi` is symbolic.
///
/// `Rz(phi) * Rx(theta)` is evaluated numerically first and its entries are
/// carried as constants into the symbolic product.
pub fn symbolic_euler_matrix(phi: f64, theta: f64, psi: &Expr) -> Matrix3<Expr> {
    let fixed = rz_matrix(phi) * rx_matrix(theta);
    fixed.map(Expr::from_f64) * symbolic_rz_matrix(psi)
}

/// Rotation by a symbolic angle about a numeric axis.
///
/// Same unit-length precondition as [`axis_rotation_matrix`].
pub fn symbolic_axis_rotation_matrix(axis: &Vector3<f64>, theta: &Expr) -> Matrix3<Expr> {
    axis_rotation_matrix(&axis.map(Expr::from_f64), theta.clone())
}

pub fn symbolic_translation_matrix(mu: &Vector3<Expr>) -> Matrix4<Expr> {
    Transform::from_translation(mu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{evaluate_matrix, Symbol};
    use crate::rotation::{euler_matrix, rpy_matrix, rx_matrix, ry_matrix};
    use approx::assert_relative_eq;
    use std::collections::BTreeSet;

    const ANGLES: [f64; 5] = [-2.0, -0.4, 0.0, 0.8, 3.1];

    #[test]
    fn test_symbolic_rz_agrees_with_numeric() {
        let psi = Symbol::new("psi");
        let m = symbolic_rz_matrix(&Expr::from(psi.clone()));
        assert_eq!(m[(2, 2)], Expr::Const(1.0));
        assert_eq!(m[(0, 0)].to_string(), "cos(psi)");
        assert_eq!(m[(0, 1)].to_string(), "-sin(psi)");
        for value in ANGLES {
            let evaluated = evaluate_matrix(&m, &psi, value).unwrap();
            assert_relative_eq!(evaluated, rz_matrix(value), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_generic_elementary_rotations_agree() {
        let t = Symbol::new("t");
        let angle = Expr::from(t.clone());
        for value in ANGLES {
            let rx = evaluate_matrix(&rx_matrix(angle.clone()), &t, value).unwrap();
            assert_relative_eq!(rx, rx_matrix(value), epsilon = 1e-12);
            let ry = evaluate_matrix(&ry_matrix(angle.clone()), &t, value).unwrap();
            assert_relative_eq!(ry, ry_matrix(value), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symbolic_euler_agrees_with_numeric() {
        let psi = Symbol::new("psi");
        let (phi, theta) = (0.7, -1.3);
        let m = symbolic_euler_matrix(phi, theta, &Expr::from(psi.clone()));
        let symbols: BTreeSet<Symbol> = m.iter().flat_map(|e| e.free_symbols()).collect();
        assert_eq!(symbols.into_iter().collect::<Vec<_>>(), vec![psi.clone()]);
        for value in ANGLES {
            let evaluated = evaluate_matrix(&m, &psi, value).unwrap();
            assert_relative_eq!(evaluated, euler_matrix(phi, theta, value), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symbolic_euler_last_row_is_constant() {
        // theta = 0 keeps the bottom row of Rz(phi) * Rx(theta) at [0, 0, 1]
        let m = symbolic_euler_matrix(0.9, 0.0, &Expr::symbol("psi"));
        assert!((0..3).all(|j| m[(2, j)].is_constant()));
        assert_eq!(m[(2, 2)], Expr::Const(1.0));
        assert!(!m[(0, 0)].is_constant());
    }

    #[test]
    fn test_fully_symbolic_rpy_agrees() {
        let t = Symbol::new("t");
        let angle = Expr::from(t.clone());
        let m = rpy_matrix(angle.clone(), Expr::from(0.25), angle * Expr::from(2.0));
        for value in ANGLES {
            let evaluated = evaluate_matrix(&m, &t, value).unwrap();
            assert_relative_eq!(evaluated, rpy_matrix(value, 0.25, 2.0 * value), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symbolic_axis_rotation_agrees() {
        let theta = Symbol::new("theta");
        let axis = Vector3::new(2.0, 1.0, -2.0) / 3.0;
        let m = symbolic_axis_rotation_matrix(&axis, &Expr::from(theta.clone()));
        for value in ANGLES {
            let evaluated = evaluate_matrix(&m, &theta, value).unwrap();
            assert_relative_eq!(evaluated, axis_rotation_matrix(&axis, value), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symbolic_translation_matrix() {
        let d = Symbol::new("d");
        let mu = Vector3::new(Expr::from(1.0), Expr::from(d.clone()), Expr::from(0.0));
        let m = symbolic_translation_matrix(&mu);
        assert_eq!(m[(1, 3)], Expr::from(d.clone()));
        assert_eq!(m[(3, 3)], Expr::Const(1.0));
        let evaluated = evaluate_matrix(&m, &d, 4.0).unwrap();
        assert_eq!(evaluated, Transform::translation_matrix(1.0, 4.0, 0.0));
    }
}
