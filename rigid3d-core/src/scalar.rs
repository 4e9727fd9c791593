//! Scalar capability set the rotation formulas are written against.

use std::ops::Neg;

use nalgebra::{ClosedAdd, ClosedMul, ClosedSub, Scalar};
use num_traits::{One, Zero};

use crate::expr::Expr;

/// A matrix entry type supporting ring arithmetic plus `cos` and `sin`.
///
/// Implemented for the floating point types (numeric track) and for
/// [`Expr`] (symbolic track).
pub trait TrigScalar:
    Scalar + Zero + One + ClosedAdd + ClosedSub + ClosedMul + Neg<Output = Self>
{
    fn cos(&self) -> Self;
    fn sin(&self) -> Self;

    /// Lift a real constant into this scalar type
    fn from_f64(value: f64) -> Self;
}

impl TrigScalar for f64 {
    fn cos(&self) -> Self {
        f64::cos(*self)
    }

    fn sin(&self) -> Self {
        f64::sin(*self)
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl TrigScalar for f32 {
    fn cos(&self) -> Self {
        f32::cos(*self)
    }

    fn sin(&self) -> Self {
        f32::sin(*self)
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl TrigScalar for Expr {
    fn cos(&self) -> Self {
        Expr::cos(self)
    }

    fn sin(&self) -> Self {
        Expr::sin(self)
    }

    fn from_f64(value: f64) -> Self {
        Expr::Const(value)
    }
}
