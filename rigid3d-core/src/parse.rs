//! Parsers for textual inputs: mode tags, angles and 3-vectors

use nalgebra::Vector3;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0, multispace1},
    combinator::{all_consuming, map, recognize, value},
    multi::many0_count,
    number::complete::double,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::homogeneous::MatrixMode;

/// Parse a mode tag. The match is exact: no surrounding whitespace.
pub fn parse_mode(input: &str) -> Result<MatrixMode> {
    match all_consuming(mode)(input) {
        Ok((_, mode)) => Ok(mode),
        Err(_) => Err(Error::unsupported_mode(input)),
    }
}

/// Parse an angle: a float literal, or an identifier that becomes a symbol
pub fn parse_angle(input: &str) -> Result<Expr> {
    match all_consuming(delimited(multispace0, angle, multispace0))(input) {
        Ok((_, angle)) => Ok(angle),
        Err(_) => Err(Error::parse("angle", input)),
    }
}

/// Parse three floats separated by commas and/or whitespace
pub fn parse_vector3(input: &str) -> Result<Vector3<f64>> {
    match all_consuming(delimited(multispace0, vector3, multispace0))(input) {
        Ok((_, (x, y, z))) => Ok(Vector3::new(x, y, z)),
        Err(_) => Err(Error::parse("vector", input)),
    }
}

fn mode(input: &str) -> IResult<&str, MatrixMode> {
    alt((
        value(MatrixMode::Numeric, alt((tag("numeric"), tag("numpy")))),
        value(MatrixMode::Symbolic, alt((tag("symbolic"), tag("sympy")))),
    ))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

// Identifiers are tried first so that names such as `inf_angle` are not
// split by the float parser.
fn angle(input: &str) -> IResult<&str, Expr> {
    alt((
        map(identifier, |name| Expr::symbol(name)),
        map(preceded(char('-'), identifier), |name| -Expr::symbol(name)),
        map(double, Expr::from),
    ))(input)
}

fn separator(input: &str) -> IResult<&str, &str> {
    alt((recognize(delimited(multispace0, char(','), multispace0)), multispace1))(input)
}

fn vector3(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, (x, _, y, _, z)) = tuple((double, separator, double, separator, double))(input)?;
    Ok((input, (x, y, z)))
}
