// quomod-num - Numeric tower value type
// Copyright (c) 2026 Tom Waddington. MIT licensed.

//! The `Number` value type and its kind classifier.
//!
//! The tower has four levels, narrowest first: Integer, Rational, Real,
//! Complex. A value of a narrower kind is usable wherever a wider kind
//! is accepted (every integer is a rational, every rational is a real,
//! every real is a complex). The `is_*` predicates answer exactly that
//! question, so operation dispatch can pick the narrowest level at
//! which both operands qualify.

use std::fmt;

use rug::{Complex, Float, Integer, Rational};

/// The four kinds of the numeric tower, narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    /// Arbitrary-precision signed integer
    Integer,
    /// Exact ratio of two integers, denominator > 0, lowest terms
    Rational,
    /// Arbitrary-precision binary float (signed zero, infinities, NaN)
    Real,
    /// Pair of reals; never a valid floor-division operand
    Complex,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Integer => "integer",
            Kind::Rational => "rational",
            Kind::Real => "real",
            Kind::Complex => "complex",
        })
    }
}

/// A value of the numeric tower.
///
/// Values are immutable inputs to the arithmetic operations; operations
/// allocate fresh results and never mutate their operands. The backing
/// representations come from the `rug` crate (GMP, MPFR and MPC).
#[derive(Debug, Clone)]
pub enum Number {
    /// Arbitrary-precision signed integer
    Integer(Integer),
    /// Exact rational; `rug` keeps it canonical (denominator > 0,
    /// lowest terms)
    Rational(Rational),
    /// Arbitrary-precision binary float with an explicit precision
    Real(Float),
    /// Complex number (pair of reals)
    Complex(Complex),
}

impl Number {
    /// Create an integer value
    pub fn integer(n: impl Into<Integer>) -> Self {
        Number::Integer(n.into())
    }

    /// Create a rational value from a numerator and denominator.
    ///
    /// Panics if the denominator is zero (same contract as
    /// `rug::Rational::from`). The result is canonicalized.
    pub fn rational(num: impl Into<Integer>, den: impl Into<Integer>) -> Self {
        Number::Rational(Rational::from((num.into(), den.into())))
    }

    /// Create a real value at the given precision
    pub fn real(prec: u32, val: f64) -> Self {
        Number::Real(Float::with_val(prec, val))
    }

    /// Get the kind tag for this value
    pub fn kind(&self) -> Kind {
        match self {
            Number::Integer(_) => Kind::Integer,
            Number::Rational(_) => Kind::Rational,
            Number::Real(_) => Kind::Real,
            Number::Complex(_) => Kind::Complex,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Integer(_) => "integer",
            Number::Rational(_) => "rational",
            Number::Real(_) => "real",
            Number::Complex(_) => "complex",
        }
    }

    /// Check if this value is usable as an Integer operand
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Check if this value is usable as a Rational operand
    /// (integers widen to rationals)
    pub fn is_rational(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::Rational(_))
    }

    /// Check if this value is usable as a Real operand
    /// (integers and rationals widen to reals)
    pub fn is_real(&self) -> bool {
        matches!(
            self,
            Number::Integer(_) | Number::Rational(_) | Number::Real(_)
        )
    }

    /// Check if this value is usable as a Complex operand
    /// (every number widens to complex)
    pub fn is_complex(&self) -> bool {
        true
    }

    /// Check if this value is an exact zero (Real: any zero, including
    /// the negative one; Complex: both parts zero)
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(z) => z.cmp0() == std::cmp::Ordering::Equal,
            Number::Rational(q) => q.cmp0() == std::cmp::Ordering::Equal,
            Number::Real(f) => f.is_zero(),
            Number::Complex(c) => c.real().is_zero() && c.imag().is_zero(),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(Integer::from(n))
    }
}

impl From<Integer> for Number {
    fn from(z: Integer) -> Self {
        Number::Integer(z)
    }
}

impl From<Rational> for Number {
    fn from(q: Rational) -> Self {
        Number::Rational(q)
    }
}

impl From<Float> for Number {
    fn from(f: Float) -> Self {
        Number::Real(f)
    }
}

impl From<Complex> for Number {
    fn from(c: Complex) -> Self {
        Number::Complex(c)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(z) => write!(f, "{}", z),
            Number::Rational(q) => write!(f, "{}", q),
            Number::Real(r) => write!(f, "{}", r),
            Number::Complex(c) => write!(f, "{}", c),
        }
    }
}

/// Numeric equality across kinds. NaN compares unequal to everything,
/// including itself. Complex values only compare against complex.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        use Number::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            (Integer(a), Rational(b)) | (Rational(b), Integer(a)) => b == a,
            (Integer(a), Real(b)) | (Real(b), Integer(a)) => b == a,
            (Rational(a), Rational(b)) => a == b,
            (Rational(a), Real(b)) | (Real(b), Rational(a)) => b == a,
            (Real(a), Real(b)) => a == b,
            (Complex(a), Complex(b)) => a == b,
            _ => false,
        }
    }
}
