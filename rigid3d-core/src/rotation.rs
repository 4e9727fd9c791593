//! Elementary and composite 3D rotation matrices.
//!
//! Every builder is generic over [`TrigScalar`], so the same formula serves the
//! numeric (`f64`, `f32`) and the symbolic ([`Expr`](crate::Expr)) tracks.
//! Right-handed convention throughout.

use nalgebra::{Matrix3, Vector3};

use crate::scalar::TrigScalar;

/// Coordinate axis of an elementary rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation about the X axis
pub fn rx_matrix<T: TrigScalar>(theta: T) -> Matrix3<T> {
    let (c, s) = (theta.cos(), theta.sin());
    Matrix3::new(
        T::one(), T::zero(), T::zero(),
        T::zero(), c.clone(), -s.clone(),
        T::zero(), s, c,
    )
}

/// Rotation about the Y axis
pub fn ry_matrix<T: TrigScalar>(theta: T) -> Matrix3<T> {
    let (c, s) = (theta.cos(), theta.sin());
    Matrix3::new(
        c.clone(), T::zero(), s.clone(),
        T::zero(), T::one(), T::zero(),
        -s, T::zero(), c,
    )
}

/// Rotation about the Z axis
pub fn rz_matrix<T: TrigScalar>(theta: T) -> Matrix3<T> {
    let (c, s) = (theta.cos(), theta.sin());
    Matrix3::new(
        c.clone(), -s.clone(), T::zero(),
        s, c, T::zero(),
        T::zero(), T::zero(), T::one(),
    )
}

pub fn elementary_rotation<T: TrigScalar>(axis: Axis, theta: T) -> Matrix3<T> {
    match axis {
        Axis::X => rx_matrix(theta),
        Axis::Y => ry_matrix(theta),
        Axis::Z => rz_matrix(theta),
    }
}

/// Z-X-Z Euler composition: `Rz(phi) * Rx(theta) * Rz(psi)`
pub fn euler_matrix<T: TrigScalar>(phi: T, theta: T, psi: T) -> Matrix3<T> {
    rz_matrix(phi) * rx_matrix(theta) * rz_matrix(psi)
}

/// Extrinsic roll-pitch-yaw: `Rz(yaw) * Ry(pitch) * Rx(roll)`
pub fn rpy_matrix<T: TrigScalar>(roll: T, pitch: T, yaw: T) -> Matrix3<T> {
    rz_matrix(yaw) * ry_matrix(pitch) * rx_matrix(roll)
}

/// Rotation by `theta` about `axis` (Rodrigues formula).
///
/// The axis must be unit length for the result to be a rotation. It is used
/// as given: a non-unit axis yields a matrix that is not orthonormal.
pub fn axis_rotation_matrix<T: TrigScalar>(axis: &Vector3<T>, theta: T) -> Matrix3<T> {
    let (x, y, z) = (axis.x.clone(), axis.y.clone(), axis.z.clone());
    let c = theta.cos();
    let s = theta.sin();
    let t = T::one() - c.clone();

    let diagonal = |u: T| u.clone() * u.clone() + (T::one() - u.clone() * u) * c.clone();
    let xy = x.clone() * y.clone() * t.clone();
    let xz = x.clone() * z.clone() * t.clone();
    let yz = y.clone() * z.clone() * t;

    Matrix3::new(
        diagonal(x.clone()),
        xy.clone() - z.clone() * s.clone(),
        xz.clone() + y.clone() * s.clone(),
        xy + z.clone() * s.clone(),
        diagonal(y.clone()),
        yz.clone() - x.clone() * s.clone(),
        xz - y * s.clone(),
        yz + x * s,
        diagonal(z),
    )
}

/// Z-X-Z Euler angles (in radians, or symbolic)
#[derive(Debug, Clone, PartialEq)]
pub struct EulerAngles<T> {
    pub phi: T,
    pub theta: T,
    pub psi: T,
}

impl<T: TrigScalar> EulerAngles<T> {
    pub fn new(phi: T, theta: T, psi: T) -> Self {
        Self { phi, theta, psi }
    }

    pub fn zero() -> Self {
        Self {
            phi: T::zero(),
            theta: T::zero(),
            psi: T::zero(),
        }
    }

    pub fn matrix(&self) -> Matrix3<T> {
        euler_matrix(self.phi.clone(), self.theta.clone(), self.psi.clone())
    }
}

impl<T: TrigScalar> Default for EulerAngles<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Extrinsic roll (X), pitch (Y), yaw (Z) angles
#[derive(Debug, Clone, PartialEq)]
pub struct RollPitchYaw<T> {
    pub roll: T,
    pub pitch: T,
    pub yaw: T,
}

impl<T: TrigScalar> RollPitchYaw<T> {
    pub fn new(roll: T, pitch: T, yaw: T) -> Self {
        Self { roll, pitch, yaw }
    }

    pub fn zero() -> Self {
        Self {
            roll: T::zero(),
            pitch: T::zero(),
            yaw: T::zero(),
        }
    }

    pub fn matrix(&self) -> Matrix3<T> {
        rpy_matrix(self.roll.clone(), self.pitch.clone(), self.yaw.clone())
    }
}

impl<T: TrigScalar> Default for RollPitchYaw<T> {
    fn default() -> Self {
        Self::zero()
    }
}
