//! Conversions between cartesian and homogeneous coordinates.
//!
//! A cartesian N x N matrix embeds into the top-left block of the
//! (N+1) x (N+1) identity; a cartesian N-vector gains a trailing 1.

use std::fmt;
use std::str::FromStr;

use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::parse::parse_mode;
use crate::scalar::TrigScalar;

/// Evaluation mode selected by a textual tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    Numeric,
    Symbolic,
}

impl FromStr for MatrixMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_mode(s)
    }
}

impl fmt::Display for MatrixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixMode::Numeric => f.write_str("numeric"),
            MatrixMode::Symbolic => f.write_str("symbolic"),
        }
    }
}

/// Homogeneous matrix in the evaluation mode it was requested in
#[derive(Debug, Clone, PartialEq)]
pub enum HomogeneousMatrix {
    Numeric(DMatrix<f64>),
    Symbolic(DMatrix<Expr>),
}

impl HomogeneousMatrix {
    pub fn mode(&self) -> MatrixMode {
        match self {
            HomogeneousMatrix::Numeric(_) => MatrixMode::Numeric,
            HomogeneousMatrix::Symbolic(_) => MatrixMode::Symbolic,
        }
    }

    pub fn into_numeric(self) -> Option<DMatrix<f64>> {
        match self {
            HomogeneousMatrix::Numeric(matrix) => Some(matrix),
            HomogeneousMatrix::Symbolic(_) => None,
        }
    }

    pub fn into_symbolic(self) -> Option<DMatrix<Expr>> {
        match self {
            HomogeneousMatrix::Numeric(_) => None,
            HomogeneousMatrix::Symbolic(matrix) => Some(matrix),
        }
    }
}

/// Embed a cartesian matrix into homogeneous form.
///
/// `mode` is `"numeric"` or `"symbolic"` (`"numpy"` and `"sympy"` are
/// accepted as aliases); anything else is [`Error::UnsupportedMode`].
pub fn cartesian_to_homogeneous(matrix: &DMatrix<f64>, mode: &str) -> Result<HomogeneousMatrix> {
    Ok(match mode.parse::<MatrixMode>()? {
        MatrixMode::Numeric => HomogeneousMatrix::Numeric(to_homogeneous(matrix)),
        MatrixMode::Symbolic => HomogeneousMatrix::Symbolic(to_homogeneous(&matrix.map(Expr::from_f64))),
    })
}

/// Embed a matrix into the top-left block of an identity one size larger
pub fn to_homogeneous<T: Scalar + Zero + One>(matrix: &DMatrix<T>) -> DMatrix<T> {
    let (rows, cols) = matrix.shape();
    let mut homogeneous = DMatrix::identity(rows + 1, cols + 1);
    homogeneous.view_mut((0, 0), (rows, cols)).copy_from(matrix);
    homogeneous
}

/// Append a trailing 1 to a cartesian vector. Numeric mode only.
pub fn cartesian_to_homogeneous_vector(vector: &DVector<f64>, mode: &str) -> Result<DVector<f64>> {
    match mode.parse::<MatrixMode>() {
        Ok(MatrixMode::Numeric) => Ok(DVector::from_iterator(
            vector.len() + 1,
            vector.iter().copied().chain(std::iter::once(1.0)),
        )),
        _ => Err(Error::unsupported_mode(mode)),
    }
}

/// Drop the last component
pub fn homogeneous_to_cartesian_vector<T: Scalar>(vector: &DVector<T>) -> DVector<T> {
    let len = vector.len().saturating_sub(1);
    vector.rows(0, len).clone_owned()
}

/// Drop the last row and column
pub fn homogeneous_to_cartesian<T: Scalar>(matrix: &DMatrix<T>) -> DMatrix<T> {
    let (rows, cols) = matrix.shape();
    matrix
        .view((0, 0), (rows.saturating_sub(1), cols.saturating_sub(1)))
        .clone_owned()
}
