//! Terminal inspector for rotation and transformation matrices
//!
//! Evaluates one builder from command-line arguments and prints the result.
//! Angles given as identifiers stay symbolic; all-numeric inputs take the
//! floating point track.

use nalgebra::Vector3;
use rigid3d_core::{
    axis_rotation_matrix, cartesian_to_homogeneous_vector, elementary_rotation, euler_matrix,
    parse_angle, parse_vector3, rpy_matrix, Axis, Expr, Transform,
};
use std::io::{self, Write};

pub mod renderer;

pub use renderer::MatrixRenderer;

pub const USAGE: &str = "\
Usage: rigid3d-terminal <command> [args]

Commands:
  rx|ry|rz <angle>                    elementary rotation
  euler <phi> <theta> <psi>           Z-X-Z Euler rotation
  rpy <roll> <pitch> <yaw>            extrinsic roll-pitch-yaw rotation
  axis <x,y,z> <angle>                rotation about a unit axis
  translate <x,y,z>                   translation-only transform
  transform <x,y,z> <roll> <pitch> <yaw>
                                      translation composed with roll-pitch-yaw
  point <x,y,z> <roll> <pitch> <yaw> <px,py,pz>
                                      point mapped through that transform
  homogeneous <mode> <x,y,z>          cartesian vector to homogeneous form

Angles are radians or identifiers (left symbolic, e.g. `psi` or `-q1`).";

/// A parsed inspector command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Elementary { axis: Axis, angle: Expr },
    Euler { phi: Expr, theta: Expr, psi: Expr },
    RollPitchYaw { roll: Expr, pitch: Expr, yaw: Expr },
    AxisAngle { axis: Vector3<f64>, angle: Expr },
    Translate(Vector3<f64>),
    Transform { translation: Vector3<f64>, roll: Expr, pitch: Expr, yaw: Expr },
    Point {
        translation: Vector3<f64>,
        roll: Expr,
        pitch: Expr,
        yaw: Expr,
        point: Vector3<f64>,
    },
    Homogeneous { mode: String, vector: Vector3<f64> },
}

fn invalid_input(message: impl ToString) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message.to_string())
}

fn angle(arg: &str) -> io::Result<Expr> {
    parse_angle(arg).map_err(|e| invalid_input(e))
}

fn vector(arg: &str) -> io::Result<Vector3<f64>> {
    parse_vector3(arg).map_err(|e| invalid_input(e))
}

impl Command {
    /// Parse the arguments following the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> io::Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        match args.as_slice() {
            [name @ ("rx" | "ry" | "rz"), a] => {
                let axis = match *name {
                    "rx" => Axis::X,
                    "ry" => Axis::Y,
                    _ => Axis::Z,
                };
                Ok(Command::Elementary { axis, angle: angle(a)? })
            }
            ["euler", phi, theta, psi] => Ok(Command::Euler {
                phi: angle(phi)?,
                theta: angle(theta)?,
                psi: angle(psi)?,
            }),
            ["rpy", roll, pitch, yaw] => Ok(Command::RollPitchYaw {
                roll: angle(roll)?,
                pitch: angle(pitch)?,
                yaw: angle(yaw)?,
            }),
            ["axis", axis, a] => Ok(Command::AxisAngle {
                axis: vector(axis)?,
                angle: angle(a)?,
            }),
            ["translate", t] => Ok(Command::Translate(vector(t)?)),
            ["transform", t, roll, pitch, yaw] => Ok(Command::Transform {
                translation: vector(t)?,
                roll: angle(roll)?,
                pitch: angle(pitch)?,
                yaw: angle(yaw)?,
            }),
            ["point", t, roll, pitch, yaw, p] => Ok(Command::Point {
                translation: vector(t)?,
                roll: angle(roll)?,
                pitch: angle(pitch)?,
                yaw: angle(yaw)?,
                point: vector(p)?,
            }),
            ["homogeneous", mode, v] => Ok(Command::Homogeneous {
                mode: mode.to_string(),
                vector: vector(v)?,
            }),
            [] => Err(invalid_input("missing command")),
            [name, ..] => Err(invalid_input(format!("unknown command or wrong arguments: {}", name))),
        }
    }
}

/// All-constant angles, if none of them is symbolic
fn numeric(angles: &[&Expr]) -> Option<Vec<f64>> {
    angles.iter().map(|a| a.as_constant()).collect()
}

/// Evaluates commands and renders their results
pub struct Inspector {
    renderer: MatrixRenderer,
}

impl Inspector {
    pub fn new(precision: usize) -> Self {
        Self {
            renderer: MatrixRenderer::new(precision),
        }
    }

    pub fn run<W: Write>(&self, command: &Command, writer: &mut W) -> io::Result<()> {
        match command {
            Command::Elementary { axis, angle } => {
                let name = match axis {
                    Axis::X => "rx",
                    Axis::Y => "ry",
                    Axis::Z => "rz",
                };
                let title = format!("{}({})", name, angle);
                match angle.as_constant() {
                    Some(value) => self.show(writer, &title, &elementary_rotation(*axis, value)),
                    None => self.show(writer, &title, &elementary_rotation(*axis, angle.clone())),
                }
            }
            Command::Euler { phi, theta, psi } => {
                let title = format!("euler Z-X-Z ({}, {}, {})", phi, theta, psi);
                match numeric(&[phi, theta, psi]).as_deref() {
                    Some(&[phi, theta, psi]) => self.show(writer, &title, &euler_matrix(phi, theta, psi)),
                    _ => self.show(
                        writer,
                        &title,
                        &euler_matrix(phi.clone(), theta.clone(), psi.clone()),
                    ),
                }
            }
            Command::RollPitchYaw { roll, pitch, yaw } => {
                let title = format!("roll-pitch-yaw ({}, {}, {})", roll, pitch, yaw);
                match numeric(&[roll, pitch, yaw]).as_deref() {
                    Some(&[roll, pitch, yaw]) => self.show(writer, &title, &rpy_matrix(roll, pitch, yaw)),
                    _ => self.show(
                        writer,
                        &title,
                        &rpy_matrix(roll.clone(), pitch.clone(), yaw.clone()),
                    ),
                }
            }
            Command::AxisAngle { axis, angle } => {
                let title = format!("axis [{}, {}, {}] angle {}", axis.x, axis.y, axis.z, angle);
                if (axis.norm() - 1.0).abs() > 1e-9 {
                    eprintln!("warning: axis is not unit length, result is not a rotation");
                }
                match angle.as_constant() {
                    Some(value) => self.show(writer, &title, &axis_rotation_matrix(axis, value)),
                    None => self.show(
                        writer,
                        &title,
                        &axis_rotation_matrix(&axis.map(Expr::from), angle.clone()),
                    ),
                }
            }
            Command::Translate(translation) => {
                let title = format!("translation [{}, {}, {}]", translation.x, translation.y, translation.z);
                self.show(writer, &title, &Transform::from_translation(translation))
            }
            Command::Transform { translation, roll, pitch, yaw } => {
                let title = format!(
                    "transform [{}, {}, {}] rpy ({}, {}, {})",
                    translation.x, translation.y, translation.z, roll, pitch, yaw
                );
                match numeric(&[roll, pitch, yaw]).as_deref() {
                    Some(&[roll, pitch, yaw]) => {
                        let orientation = rpy_matrix(roll, pitch, yaw);
                        self.show(writer, &title, &Transform::compose(translation, Some(&orientation)))
                    }
                    _ => {
                        let orientation = rpy_matrix(roll.clone(), pitch.clone(), yaw.clone());
                        let translation = translation.map(Expr::from);
                        self.show(writer, &title, &Transform::compose(&translation, Some(&orientation)))
                    }
                }
            }
            Command::Point { translation, roll, pitch, yaw, point } => {
                let title = format!(
                    "point [{}, {}, {}] through transform [{}, {}, {}] rpy ({}, {}, {})",
                    point.x, point.y, point.z, translation.x, translation.y, translation.z, roll, pitch, yaw
                );
                match numeric(&[roll, pitch, yaw]).as_deref() {
                    Some(&[roll, pitch, yaw]) => {
                        let orientation = rpy_matrix(roll, pitch, yaw);
                        let matrix = Transform::compose(translation, Some(&orientation));
                        self.show(writer, &title, &Transform::transform_point(&matrix, point))
                    }
                    _ => {
                        let orientation = rpy_matrix(roll.clone(), pitch.clone(), yaw.clone());
                        let matrix = Transform::compose(&translation.map(Expr::from), Some(&orientation));
                        self.show(writer, &title, &Transform::transform_point(&matrix, &point.map(Expr::from)))
                    }
                }
            }
            Command::Homogeneous { mode, vector } => {
                let cartesian = nalgebra::DVector::from_column_slice(vector.as_slice());
                let homogeneous = cartesian_to_homogeneous_vector(&cartesian, mode).map_err(|e| invalid_input(e))?;
                self.show(writer, &format!("homogeneous ({})", mode), &homogeneous)
            }
        }
    }

    fn show<T, R, C, S, W>(
        &self,
        writer: &mut W,
        title: &str,
        matrix: &nalgebra::Matrix<T, R, C, S>,
    ) -> io::Result<()>
    where
        T: renderer::Cell,
        R: nalgebra::Dim,
        C: nalgebra::Dim,
        S: nalgebra::base::storage::RawStorage<T, R, C>,
        W: Write,
    {
        self.renderer.draw_title(writer, title)?;
        self.renderer.draw(writer, matrix)?;
        writer.flush()
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(4)
    }
}
