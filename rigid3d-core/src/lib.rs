//! rigid3d core library - rotation and homogeneous transformation math
//!
//! Stateless builders for 3D rotation matrices (elementary, Euler Z-X-Z,
//! roll-pitch-yaw, axis-angle) and 4x4 homogeneous transforms. Every formula is
//! generic over [`TrigScalar`], so it runs on floats (numeric track) or on
//! [`Expr`] trees with a free symbol left for later substitution (symbolic
//! track).
//!
//! ```
//! use rigid3d_core::{euler_matrix, symbolic_euler_matrix, evaluate_matrix, Expr, Symbol};
//!
//! let psi = Symbol::new("psi");
//! let symbolic = symbolic_euler_matrix(0.3, 1.1, &Expr::from(psi.clone()));
//! let numeric = evaluate_matrix(&symbolic, &psi, 0.5)?;
//! assert!((numeric - euler_matrix(0.3, 1.1, 0.5)).norm() < 1e-12);
//! # Ok::<(), rigid3d_core::Error>(())
//! ```

pub mod error;
pub mod expr;
pub mod homogeneous;
pub mod parse;
pub mod rotation;
pub mod scalar;
pub mod symbolic;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use expr::{evaluate_matrix, substitute_matrix, Expr, Symbol};
pub use homogeneous::{
    cartesian_to_homogeneous, cartesian_to_homogeneous_vector, homogeneous_to_cartesian,
    homogeneous_to_cartesian_vector, to_homogeneous, HomogeneousMatrix, MatrixMode,
};
pub use parse::{parse_angle, parse_mode, parse_vector3};
pub use rotation::{
    axis_rotation_matrix, elementary_rotation, euler_matrix, rpy_matrix, rx_matrix, ry_matrix,
    rz_matrix, Axis, EulerAngles, RollPitchYaw,
};
pub use scalar::TrigScalar;
pub use symbolic::{
    symbolic_axis_rotation_matrix, symbolic_euler_matrix, symbolic_rz_matrix,
    symbolic_translation_matrix,
};
pub use transform::Transform;
