//! Symbolic scalar: unevaluated algebraic expressions over named symbols.
//!
//! `Expr` implements the arithmetic nalgebra needs for matrix products, so the
//! same rotation formulas run over it as over `f64`. Constructors fold purely
//! numeric sub-terms and the trivial identities (`0 + x`, `1 * x`, `0 * x`);
//! nothing else is simplified.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::Arc;

use nalgebra::SMatrix;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// A named free variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Algebraic expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Symbol(Symbol),
    Neg(Arc<Expr>),
    Add(Arc<Expr>, Arc<Expr>),
    Sub(Arc<Expr>, Arc<Expr>),
    Mul(Arc<Expr>, Arc<Expr>),
    Cos(Arc<Expr>),
    Sin(Arc<Expr>),
}

impl Expr {
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Const(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Const(_))
    }

    pub fn cos(&self) -> Expr {
        match self {
            Expr::Const(value) => Expr::Const(value.cos()),
            _ => Expr::Cos(Arc::new(self.clone())),
        }
    }

    pub fn sin(&self) -> Expr {
        match self {
            Expr::Const(value) => Expr::Const(value.sin()),
            _ => Expr::Sin(Arc::new(self.clone())),
        }
    }

    /// Every symbol appearing in the expression
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Const(_) => {}
            Expr::Symbol(symbol) => {
                symbols.insert(symbol.clone());
            }
            Expr::Neg(inner) | Expr::Cos(inner) | Expr::Sin(inner) => {
                inner.collect_symbols(symbols)
            }
            Expr::Add(lhs, rhs) | Expr::Sub(lhs, rhs) | Expr::Mul(lhs, rhs) => {
                lhs.collect_symbols(symbols);
                rhs.collect_symbols(symbols);
            }
        }
    }

    /// Replace `symbol` with `value`, refolding constants on the way up
    pub fn subs(&self, symbol: &Symbol, value: &Expr) -> Expr {
        match self {
            Expr::Const(_) => self.clone(),
            Expr::Symbol(s) if s == symbol => value.clone(),
            Expr::Symbol(_) => self.clone(),
            Expr::Neg(inner) => -inner.subs(symbol, value),
            Expr::Add(lhs, rhs) => lhs.subs(symbol, value) + rhs.subs(symbol, value),
            Expr::Sub(lhs, rhs) => lhs.subs(symbol, value) - rhs.subs(symbol, value),
            Expr::Mul(lhs, rhs) => lhs.subs(symbol, value) * rhs.subs(symbol, value),
            Expr::Cos(inner) => inner.subs(symbol, value).cos(),
            Expr::Sin(inner) => inner.subs(symbol, value).sin(),
        }
    }

    /// Numeric value with `symbol` bound to `value`.
    ///
    /// Fails if any other symbol is left in the expression.
    pub fn evaluate(&self, symbol: &Symbol, value: f64) -> Result<f64> {
        Ok(match self {
            Expr::Const(c) => *c,
            Expr::Symbol(s) if s == symbol => value,
            Expr::Symbol(s) => return Err(Error::unbound_symbol(s.name())),
            Expr::Neg(inner) => -inner.evaluate(symbol, value)?,
            Expr::Add(lhs, rhs) => lhs.evaluate(symbol, value)? + rhs.evaluate(symbol, value)?,
            Expr::Sub(lhs, rhs) => lhs.evaluate(symbol, value)? - rhs.evaluate(symbol, value)?,
            Expr::Mul(lhs, rhs) => lhs.evaluate(symbol, value)? * rhs.evaluate(symbol, value)?,
            Expr::Cos(inner) => inner.evaluate(symbol, value)?.cos(),
            Expr::Sin(inner) => inner.evaluate(symbol, value)?.sin(),
        })
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Neg(_) => 2,
            Expr::Const(value) if value.is_sign_negative() => 2,
            _ => 3,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{}", value),
            Expr::Symbol(symbol) => write!(f, "{}", symbol),
            Expr::Neg(inner) => {
                f.write_str("-")?;
                inner.fmt_operand(f, 3)
            }
            Expr::Add(lhs, rhs) => {
                lhs.fmt_operand(f, 1)?;
                f.write_str(" + ")?;
                rhs.fmt_operand(f, 1)
            }
            Expr::Sub(lhs, rhs) => {
                lhs.fmt_operand(f, 1)?;
                f.write_str(" - ")?;
                rhs.fmt_operand(f, 2)
            }
            Expr::Mul(lhs, rhs) => {
                lhs.fmt_operand(f, 2)?;
                f.write_str("*")?;
                rhs.fmt_operand(f, 3)
            }
            Expr::Cos(inner) => write!(f, "cos({})", inner),
            Expr::Sin(inner) => write!(f, "sin({})", inner),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Const(value)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        if let (Expr::Const(a), Expr::Const(b)) = (&self, &rhs) {
            return Expr::Const(a + b);
        }
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        // x + -y is stored as x - y
        match rhs {
            Expr::Neg(inner) => Expr::Sub(Arc::new(self), inner),
            Expr::Const(value) if value < 0.0 => {
                Expr::Sub(Arc::new(self), Arc::new(Expr::Const(-value)))
            }
            rhs => Expr::Add(Arc::new(self), Arc::new(rhs)),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        if let (Expr::Const(a), Expr::Const(b)) = (&self, &rhs) {
            return Expr::Const(a - b);
        }
        if rhs.is_zero() {
            return self;
        }
        if self.is_zero() {
            return -rhs;
        }
        match rhs {
            Expr::Neg(inner) => Expr::Add(Arc::new(self), inner),
            Expr::Const(value) if value < 0.0 => {
                Expr::Add(Arc::new(self), Arc::new(Expr::Const(-value)))
            }
            rhs => Expr::Sub(Arc::new(self), Arc::new(rhs)),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        if let (Expr::Const(a), Expr::Const(b)) = (&self, &rhs) {
            return Expr::Const(a * b);
        }
        if self.is_zero() || rhs.is_zero() {
            return Expr::zero();
        }
        if self.is_one() {
            return rhs;
        }
        if rhs.is_one() {
            return self;
        }
        Expr::Mul(Arc::new(self), Arc::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Const(value) => Expr::Const(-value),
            Expr::Neg(inner) => Arc::unwrap_or_clone(inner),
            other => Expr::Neg(Arc::new(other)),
        }
    }
}

impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Expr) {
        *self = std::mem::replace(self, Expr::zero()) + rhs;
    }
}

impl SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Expr) {
        *self = std::mem::replace(self, Expr::zero()) - rhs;
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Expr) {
        *self = std::mem::replace(self, Expr::zero()) * rhs;
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Expr::Const(0.0)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(value) if *value == 0.0)
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::Const(1.0)
    }

    fn is_one(&self) -> bool {
        matches!(self, Expr::Const(value) if *value == 1.0)
    }
}

/// Substitute `symbol` in every entry of a matrix
pub fn substitute_matrix<const R: usize, const C: usize>(
    matrix: &SMatrix<Expr, R, C>,
    symbol: &Symbol,
    value: &Expr,
) -> SMatrix<Expr, R, C> {
    matrix.map(|entry| entry.subs(symbol, value))
}

/// Evaluate every entry of a matrix with `symbol` bound to `value`
pub fn evaluate_matrix<const R: usize, const C: usize>(
    matrix: &SMatrix<Expr, R, C>,
    symbol: &Symbol,
    value: f64,
) -> Result<SMatrix<f64, R, C>> {
    // Both sides iterate in column-major order.
    let values = matrix
        .iter()
        .map(|entry| entry.evaluate(symbol, value))
        .collect::<Result<Vec<_>>>()?;
    Ok(SMatrix::from_iterator(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix2;

    #[test]
    fn test_constant_folding() {
        let sum = Expr::from(1.5) + Expr::from(2.0);
        assert_eq!(sum, Expr::Const(3.5));

        let product = Expr::from(0.5) * Expr::from(4.0);
        assert_eq!(product, Expr::Const(2.0));

        assert_eq!(Expr::from(0.0).cos(), Expr::Const(1.0));
        assert_eq!(-Expr::from(2.0), Expr::Const(-2.0));
    }

    #[test]
    fn test_identities() {
        let x = Expr::symbol("x");
        assert_eq!(Expr::zero() + x.clone(), x);
        assert_eq!(x.clone() + Expr::zero(), x);
        assert_eq!(x.clone() - Expr::zero(), x);
        assert_eq!(Expr::zero() - x.clone(), -x.clone());
        assert_eq!(Expr::one() * x.clone(), x);
        assert_eq!(x.clone() * Expr::one(), x);
        assert!((Expr::zero() * x.clone()).is_zero());
        assert_eq!(-(-x.clone()), x);
    }

    #[test]
    fn test_display() {
        let psi = Expr::symbol("psi");
        let expr = psi.cos() * Expr::from(0.5) + Expr::from(1.0);
        assert_eq!(expr.to_string(), "cos(psi)*0.5 + 1");

        let expr = -psi.sin();
        assert_eq!(expr.to_string(), "-sin(psi)");

        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let expr = x.clone() * (y.clone() + Expr::from(2.0));
        assert_eq!(expr.to_string(), "x*(y + 2)");

        let expr = x.clone() - (y.clone() - Expr::from(1.0));
        assert_eq!(expr.to_string(), "x - (y - 1)");

        let expr = x * Expr::from(-2.0);
        assert_eq!(expr.to_string(), "x*(-2)");
    }

    #[test]
    fn test_negated_terms_fold_into_sign() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        assert_eq!((x.clone() + -y.clone()).to_string(), "x - y");
        assert_eq!((x.clone() - -y.clone()).to_string(), "x + y");
        assert_eq!((x.clone() + Expr::from(-2.0)).to_string(), "x - 2");
        assert_eq!((x.clone() - Expr::from(-2.0)).to_string(), "x + 2");
        assert_eq!((x.clone() - -y.sin()).to_string(), "x + sin(y)");

        let t = Symbol::new("t");
        let expr = Expr::from(t.clone()) + -(Expr::from(t.clone()).cos());
        assert_relative_eq!(expr.evaluate(&t, 0.4).unwrap(), 0.4 - 0.4f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_subs_folds_to_constant() {
        let theta = Symbol::new("theta");
        let expr = Expr::from(theta.clone()).cos() * Expr::from(2.0);
        let substituted = expr.subs(&theta, &Expr::from(0.0));
        assert_eq!(substituted, Expr::Const(2.0));
    }

    #[test]
    fn test_evaluate() {
        let theta = Symbol::new("theta");
        let t = Expr::from(theta.clone());
        let expr = t.sin() * t.sin() + t.cos() * t.cos();
        assert_relative_eq!(expr.evaluate(&theta, 0.7).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_unbound_symbol() {
        let theta = Symbol::new("theta");
        let expr = Expr::symbol("phi") + Expr::from(theta.clone());
        assert_eq!(
            expr.evaluate(&theta, 1.0),
            Err(Error::unbound_symbol("phi"))
        );
    }

    #[test]
    fn test_free_symbols() {
        let expr = Expr::symbol("b").cos() * Expr::symbol("a") - Expr::symbol("b");
        let names: Vec<_> = expr.free_symbols().into_iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(Expr::from(3.0).free_symbols().is_empty());
    }

    #[test]
    fn test_evaluate_matrix() {
        let t = Symbol::new("t");
        let m = Matrix2::new(
            Expr::from(t.clone()).cos(),
            -Expr::from(t.clone()).sin(),
            Expr::from(t.clone()).sin(),
            Expr::from(t.clone()).cos(),
        );
        let value = evaluate_matrix(&m, &t, 0.3).unwrap();
        let expected = Matrix2::new(0.3f64.cos(), -0.3f64.sin(), 0.3f64.sin(), 0.3f64.cos());
        assert_relative_eq!(value, expected, epsilon = 1e-12);

        let substituted = substitute_matrix(&m, &t, &Expr::from(0.0));
        assert_eq!(substituted, Matrix2::identity());
    }
}
