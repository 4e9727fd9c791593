//! Homogeneous 4x4 transformation builders

use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};

use crate::scalar::TrigScalar;

/// Transform builder for 4x4 homogeneous matrices.
///
/// Layout: orientation in the top-left 3x3 block, translation in the top three
/// entries of the last column, `[0, 0, 0, 1]` as the bottom row.
pub struct Transform;

impl Transform {
    /// Create a translation-only transform from a vector
    pub fn from_translation<T: TrigScalar>(mu: &Vector3<T>) -> Matrix4<T> {
        Self::compose(mu, Some(&Matrix3::identity()))
    }

    /// Create a translation-only transform from its components
    pub fn translation_matrix<T: TrigScalar>(x: T, y: T, z: T) -> Matrix4<T> {
        Matrix4::new(
            T::one(), T::zero(), T::zero(), x,
            T::zero(), T::one(), T::zero(), y,
            T::zero(), T::zero(), T::one(), z,
            T::zero(), T::zero(), T::zero(), T::one(),
        )
    }

    /// Split a transform into its translation and orientation blocks.
    ///
    /// The bottom row is not checked.
    pub fn decompose<T: TrigScalar>(matrix: &Matrix4<T>) -> (Vector3<T>, Matrix3<T>) {
        let translation = matrix.fixed_view::<3, 1>(0, 3).clone_owned();
        let orientation = matrix.fixed_view::<3, 3>(0, 0).clone_owned();
        (translation, orientation)
    }

    /// Build a transform from a translation and an orientation.
    ///
    /// Without an orientation the block is left all zero, which is a
    /// placeholder and not a rotation.
    pub fn compose<T: TrigScalar>(
        translation: &Vector3<T>,
        orientation: Option<&Matrix3<T>>,
    ) -> Matrix4<T> {
        let mut matrix = Matrix4::identity();
        match orientation {
            Some(orientation) => matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(orientation),
            None => matrix.fixed_view_mut::<3, 3>(0, 0).fill(T::zero()),
        }
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
        matrix
    }

    /// Apply a transform to a cartesian point
    pub fn transform_point<T: TrigScalar>(matrix: &Matrix4<T>, point: &Vector3<T>) -> Vector3<T> {
        let homogeneous = Vector4::new(point.x.clone(), point.y.clone(), point.z.clone(), T::one());
        (matrix * homogeneous).fixed_rows::<3>(0).clone_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{evaluate_matrix, Expr, Symbol};
    use crate::rotation::{euler_matrix, rz_matrix};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_translation_builders_agree() {
        let mu = Vector3::new(1.0, -2.5, 3.0);
        let from_vector = Transform::from_translation(&mu);
        let from_components = Transform::translation_matrix(1.0, -2.5, 3.0);
        assert_eq!(from_vector, from_components);
        assert_eq!(from_vector.fixed_view::<3, 3>(0, 0), Matrix3::identity());
        assert_eq!(from_vector.row(3), Vector4::new(0.0, 0.0, 0.0, 1.0).transpose());
    }

    #[test]
    fn test_matches_nalgebra_translation() {
        let mu = Vector3::new(0.5, 0.25, -4.0);
        assert_eq!(Transform::from_translation(&mu), Matrix4::new_translation(&mu));
    }

    #[test]
    fn test_compose_then_decompose() {
        let translation = Vector3::new(0.1, 0.2, 0.3);
        let orientation = euler_matrix(0.3, 1.2, -0.4);
        let matrix = Transform::compose(&translation, Some(&orientation));
        assert_eq!(matrix.row(3), Vector4::new(0.0, 0.0, 0.0, 1.0).transpose());

        let (t, r) = Transform::decompose(&matrix);
        assert_eq!(t, translation);
        assert_eq!(r, orientation);
    }

    #[test]
    fn test_symbolic_compose_then_decompose() {
        let yaw = Symbol::new("yaw");
        let orientation = rz_matrix(Expr::from(yaw.clone()));
        let translation = Vector3::new(Expr::symbol("x"), Expr::from(2.0), Expr::from(0.0));
        let matrix = Transform::compose(&translation, Some(&orientation));
        assert_eq!(matrix[(0, 3)], Expr::symbol("x"));
        assert_eq!(matrix[(0, 0)].to_string(), "cos(yaw)");
        assert!((0..3).all(|j| matrix[(3, j)] == Expr::Const(0.0)));
        assert_eq!(matrix[(3, 3)], Expr::Const(1.0));

        let (t, r) = Transform::decompose(&matrix);
        assert_eq!(t, translation);
        assert_eq!(r, orientation);
        let evaluated = evaluate_matrix(&r, &yaw, 0.9).unwrap();
        assert_relative_eq!(evaluated, rz_matrix(0.9), epsilon = 1e-12);
    }

    #[test]
    fn test_symbolic_transform_point() {
        let yaw = Symbol::new("yaw");
        let matrix = Transform::compose(
            &Vector3::new(Expr::from(1.0), Expr::from(0.0), Expr::from(0.0)),
            Some(&rz_matrix(Expr::from(yaw.clone()))),
        );
        let point = Transform::transform_point(
            &matrix,
            &Vector3::new(Expr::from(1.0), Expr::from(0.0), Expr::from(0.0)),
        );
        let value = 0.3;
        let x = point.x.evaluate(&yaw, value).unwrap();
        let y = point.y.evaluate(&yaw, value).unwrap();
        assert_relative_eq!(x, value.cos() + 1.0, epsilon = 1e-12);
        assert_relative_eq!(y, value.sin(), epsilon = 1e-12);
        assert_eq!(point.z, Expr::Const(0.0));
    }

    #[test]
    fn test_compose_without_orientation_is_zero_block() {
        let matrix = Transform::compose(&Vector3::new(1.0, 2.0, 3.0), None);
        let (t, r) = Transform::decompose(&matrix);
        assert_eq!(r, Matrix3::zeros());
        assert_eq!(t, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(matrix[(3, 3)], 1.0);
    }

    #[test]
    fn test_transform_point() {
        let matrix = Transform::compose(&Vector3::new(1.0, 0.0, 0.0), Some(&rz_matrix(FRAC_PI_2)));
        let point = Transform::transform_point(&matrix, &Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point, Vector3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }
}
