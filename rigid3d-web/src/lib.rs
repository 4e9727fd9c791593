//! rigid3d Web - WASM bindings for the rotation and transform builders
//!
//! Matrices cross the JS boundary as flat row-major `Float64Array`s (9 values
//! for a rotation, 16 for a transform). Symbolic results are returned as
//! strings, one row per line.

use nalgebra::base::storage::RawStorage;
use nalgebra::{DMatrix, Dim, Matrix, Vector3};
use rigid3d_core::{
    axis_rotation_matrix, cartesian_to_homogeneous, euler_matrix, homogeneous_to_cartesian,
    parse_angle, rpy_matrix, rx_matrix, ry_matrix, rz_matrix, symbolic_euler_matrix,
    HomogeneousMatrix, Transform,
};
use wasm_bindgen::prelude::*;

/// Flatten a matrix in row-major order
fn row_major<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> Vec<T>
where
    T: Clone,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (rows, cols) = matrix.shape();
    (0..rows)
        .flat_map(|i| (0..cols).map(move |j| matrix[(i, j)].clone()))
        .collect()
}

fn render_rows<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> String
where
    T: ToString,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (rows, cols) = matrix.shape();
    (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| matrix[(i, j)].to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_js_error(error: rigid3d_core::Error) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub fn rx(theta: f64) -> Vec<f64> {
    row_major(&rx_matrix(theta))
}

#[wasm_bindgen]
pub fn ry(theta: f64) -> Vec<f64> {
    row_major(&ry_matrix(theta))
}

#[wasm_bindgen]
pub fn rz(theta: f64) -> Vec<f64> {
    row_major(&rz_matrix(theta))
}

#[wasm_bindgen]
pub fn euler(phi: f64, theta: f64, psi: f64) -> Vec<f64> {
    row_major(&euler_matrix(phi, theta, psi))
}

#[wasm_bindgen]
pub fn rpy(roll: f64, pitch: f64, yaw: f64) -> Vec<f64> {
    row_major(&rpy_matrix(roll, pitch, yaw))
}

/// Rotation about `(x, y, z)`, which must be unit length
#[wasm_bindgen(js_name = axisRotation)]
pub fn axis_rotation(x: f64, y: f64, z: f64, theta: f64) -> Vec<f64> {
    row_major(&axis_rotation_matrix(&Vector3::new(x, y, z), theta))
}

#[wasm_bindgen]
pub fn translation(x: f64, y: f64, z: f64) -> Vec<f64> {
    row_major(&Transform::translation_matrix(x, y, z))
}

/// Translation `(x, y, z)` combined with a roll-pitch-yaw orientation
#[wasm_bindgen(js_name = poseTransform)]
pub fn pose_transform(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Vec<f64> {
    let orientation = rpy_matrix(roll, pitch, yaw);
    row_major(&Transform::compose(&Vector3::new(x, y, z), Some(&orientation)))
}

fn symbolic_euler_rows(phi: f64, theta: f64, psi: &str) -> rigid3d_core::Result<String> {
    let psi = parse_angle(psi)?;
    Ok(render_rows(&symbolic_euler_matrix(phi, theta, &psi)))
}

/// Euler rotation with `psi` given as a symbol name
#[wasm_bindgen(js_name = symbolicEuler)]
pub fn symbolic_euler(phi: f64, theta: f64, psi: &str) -> Result<String, JsValue> {
    symbolic_euler_rows(phi, theta, psi).map_err(to_js_error)
}

/// Whether `values` holds exactly `n * n` entries
fn is_square(values: &[f64], n: usize) -> bool {
    n.checked_mul(n) == Some(values.len())
}

fn homogeneous_values(values: &[f64], n: usize, mode: &str) -> rigid3d_core::Result<Vec<f64>> {
    let cartesian = DMatrix::from_row_slice(n, n, values);
    match cartesian_to_homogeneous(&cartesian, mode)? {
        HomogeneousMatrix::Numeric(matrix) => Ok(row_major(&matrix)),
        HomogeneousMatrix::Symbolic(matrix) => Ok(row_major(&matrix)
            .iter()
            .map(|entry| entry.as_constant().unwrap_or(f64::NAN))
            .collect()),
    }
}

/// Embed a row-major `n x n` matrix into homogeneous form
#[wasm_bindgen(js_name = cartesianToHomogeneous)]
pub fn cartesian_to_homogeneous_js(values: &[f64], n: usize, mode: &str) -> Result<Vec<f64>, JsValue> {
    if !is_square(values, n) {
        return Err(JsValue::from_str("expected n * n values"));
    }
    homogeneous_values(values, n, mode).map_err(to_js_error)
}

/// Strip the last row and column of a row-major `n x n` matrix
#[wasm_bindgen(js_name = homogeneousToCartesian)]
pub fn homogeneous_to_cartesian_js(values: &[f64], n: usize) -> Result<Vec<f64>, JsValue> {
    if !is_square(values, n) {
        return Err(JsValue::from_str("expected n * n values"));
    }
    let homogeneous = DMatrix::from_row_slice(n, n, values);
    Ok(row_major(&homogeneous_to_cartesian(&homogeneous)))
}
