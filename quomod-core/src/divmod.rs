// quomod-core - Floor division with remainder across the numeric tower
// Copyright (c) 2026 Tom Waddington. MIT licensed.

//! Floor division with remainder (`divmod`) across the numeric tower.
//!
//! The dispatcher picks the narrowest kind at which both operands
//! qualify - Integer first, then Rational, then Real - and routes to
//! that kind's algorithm. Complex operands never qualify: floor
//! division is undefined for complex numbers, so the dispatcher answers
//! "not applicable" (`None`) and the kind-fixed complex entry fails
//! outright. `None` is distinct from an error on purpose; it lets an
//! operator-dispatch layer try the reflected operation, while the
//! context-bound entry point reports it as a type error.
//!
//! Everywhere the quotient rounds toward negative infinity and the
//! remainder takes the divisor's sign, so `x == q*y + r` with
//! `|r| < |y|` - exactly for Integer and Rational operands, to within
//! one rounding error for Real ones.

use std::cmp::Ordering;

use quomod_num::{Float, Integer, Number, Rational, Round, Special};

use crate::context::{self, Context, Flags};
use crate::error::{Error, Result};

const OP: &str = "divmod";

// ============================================================================
// Kind conversions
// ============================================================================

/// Convert a classifier-approved Integer operand to its backing value.
fn as_integer(v: &Number) -> Result<Integer> {
    match v {
        Number::Integer(z) => Ok(z.clone()),
        other => Err(Error::conversion("integer", other.type_name())),
    }
}

/// Convert a classifier-approved Rational operand to its backing
/// value, promoting integers.
fn as_rational(v: &Number) -> Result<Rational> {
    match v {
        Number::Integer(z) => Ok(Rational::from(z)),
        Number::Rational(q) => Ok(q.clone()),
        other => Err(Error::conversion("rational", other.type_name())),
    }
}

/// Convert a classifier-approved Real operand to a float at the
/// context's working precision under its rounding mode.
fn as_real(v: &Number, ctx: &Context) -> Result<Float> {
    let prec = ctx.precision();
    let round = ctx.rounding();
    match v {
        Number::Integer(z) => Ok(Float::with_val_round(prec, z, round).0),
        Number::Rational(q) => Ok(Float::with_val_round(prec, q, round).0),
        Number::Real(f) => Ok(Float::with_val_round(prec, f, round).0),
        other => Err(Error::conversion("real", other.type_name())),
    }
}

// ============================================================================
// Per-kind algorithms
// ============================================================================

/// Integer floor division with remainder.
///
/// `x == q*y + r`, `|r| < |y|`, and `r` is zero or has `y`'s sign.
fn divmod_integer(x: &Number, y: &Number) -> Result<(Number, Number)> {
    let xz = as_integer(x)?;
    let yz = as_integer(y)?;
    if yz.cmp0() == Ordering::Equal {
        return Err(Error::DivisionByZero { op: OP });
    }

    // Word-sized divisors take the single-limb path. A negative
    // divisor uses ceiling division by |y| and negates the quotient,
    // which leaves the remainder with y's sign.
    if let Some(d) = yz.to_i32() {
        let (quo, rem) = if d > 0 {
            xz.div_rem_floor(Integer::from(d))
        } else {
            let (q, r) = xz.div_rem_ceil(Integer::from(-(i64::from(d))));
            (-q, r)
        };
        return Ok((Number::Integer(quo), Number::Integer(rem)));
    }

    let (quo, rem) = xz.div_rem_floor(yz);
    Ok((Number::Integer(quo), Number::Integer(rem)))
}

/// Rational floor division with remainder.
///
/// The quotient is the Integer floor of the exact ratio x/y; the
/// remainder is recovered by exact subtraction x - q*y, never by
/// rounding, so the identity `x == q*y + r` holds exactly.
fn divmod_rational(x: &Number, y: &Number) -> Result<(Number, Number)> {
    let xq = as_rational(x)?;
    let yq = as_rational(y)?;
    if yq.cmp0() == Ordering::Equal {
        return Err(Error::DivisionByZero { op: OP });
    }

    let (num, den) = Rational::from(&xq / &yq).into_numer_denom();
    let (quo, _) = num.div_rem_floor(den);
    let prod = Rational::from(&yq * &quo);
    let rem = Rational::from(&xq - &prod);
    Ok((Number::Integer(quo), Number::Rational(rem)))
}

/// Real floor division with remainder.
///
/// Decision order over special values, each step setting a context
/// flag and failing immediately when that flag's trap is enabled:
///
/// 1. zero divisor: divide-by-zero, then keep going - the result shape
///    still depends on the remaining branches;
/// 2. NaN operand or infinite dividend: invalid, result (NaN, NaN);
/// 3. infinite divisor: invalid, with a fixed sign table over x;
/// 4. finite case: quo = floor(x/y) divided rounding down, rem
///    recomputed as -(quo*y - x) with a fused multiply-subtract.
///
/// Both results are then clamped into the context's exponent range and
/// the conditions raised by this one operation are merged into the
/// sticky flags before the underflow, overflow and inexact traps are
/// checked, in that order.
fn divmod_real(x: &Number, y: &Number, ctx: &mut Context) -> Result<(Number, Number)> {
    let prec = ctx.precision();
    let round = ctx.rounding();
    let tempx = as_real(x, ctx)?;
    let tempy = as_real(y, ctx)?;

    if tempy.is_zero() {
        ctx.flags.divide_by_zero = true;
        if ctx.traps.divide_by_zero {
            return Err(Error::DivisionByZero { op: OP });
        }
    }

    // Conditions raised by this operation only; merged into the sticky
    // flags at the end so the traps don't fire on stale flags.
    let mut raised = Flags::default();
    let mut quo;
    let mut rem;
    let mut quo_dir = Ordering::Equal;
    let mut rem_dir = Ordering::Equal;

    if tempx.is_nan() || tempy.is_nan() || tempx.is_infinite() {
        ctx.flags.invalid = true;
        if ctx.traps.invalid {
            return Err(Error::InvalidOperation { op: OP });
        }
        quo = Float::with_val(prec, Special::Nan);
        rem = Float::with_val(prec, Special::Nan);
    } else if tempy.is_infinite() {
        ctx.flags.invalid = true;
        if ctx.traps.invalid {
            return Err(Error::InvalidOperation { op: OP });
        }
        if tempx.is_zero() {
            let zero = if tempy.is_sign_negative() {
                Special::NegZero
            } else {
                Special::Zero
            };
            quo = Float::with_val(prec, zero);
            rem = Float::with_val(prec, zero);
        } else if tempx.is_sign_negative() != tempy.is_sign_negative() {
            let inf = if tempy.is_sign_negative() {
                Special::NegInfinity
            } else {
                Special::Infinity
            };
            quo = Float::with_val(prec, -1);
            rem = Float::with_val(prec, inf);
        } else {
            quo = Float::with_val(prec, 0);
            let (r, dir) = Float::with_val_round(prec, &tempx, round);
            rem = r;
            rem_dir = dir;
        }
    } else {
        // Divide rounding toward negative infinity, then floor again:
        // the rounding step can lift an exact integer quotient, and the
        // floor must win. The floor is itself a rounding: when it
        // changes the value it raises inexact, even if the division was
        // exact (7.0 / 2.0 divides to 3.5 exactly, then floors to 3).
        let (mut q, dir) = Float::with_val_round(prec, &tempx / &tempy, Round::Down);
        quo_dir = dir;
        if q.is_finite() && !q.is_integer() {
            q.floor_mut();
            raised.inexact = true;
            quo_dir = Ordering::Less;
        }
        // rem = -(quo*y - x) as one fused rounding; a naive
        // x - quo*y would round twice and break the round-trip
        // identity.
        let mut r = q.clone();
        rem_dir = r.mul_sub_round(&tempy, &tempx, round);
        r = -r;
        quo = q;
        rem = r;
        // An untrapped zero divisor lands here: the division gave an
        // infinity and the fused step turned it into NaN.
        if quo.is_nan() || rem.is_nan() {
            raised.invalid = true;
        }
    }

    ctx.enforce_range(&mut rem, rem_dir, &mut raised);
    ctx.enforce_range(&mut quo, quo_dir, &mut raised);
    ctx.flags.merge(raised);
    if raised.underflow && ctx.traps.underflow {
        return Err(Error::Underflow { op: OP });
    }
    if raised.overflow && ctx.traps.overflow {
        return Err(Error::Overflow { op: OP });
    }
    if raised.inexact && ctx.traps.inexact {
        return Err(Error::Inexact { op: OP });
    }
    Ok((Number::Real(quo), Number::Real(rem)))
}

// ============================================================================
// Dispatcher and entry points
// ============================================================================

/// Dispatch divmod to the narrowest kind both operands qualify for,
/// against an explicit context. Returns `None` when no kind accepts
/// both operands - a Complex operand always lands here.
pub fn number_divmod(
    x: &Number,
    y: &Number,
    ctx: &mut Context,
) -> Option<Result<(Number, Number)>> {
    if x.is_integer() && y.is_integer() {
        return Some(divmod_integer(x, y));
    }
    if x.is_rational() && y.is_rational() {
        return Some(divmod_rational(x, y));
    }
    if x.is_real() && y.is_real() {
        return Some(divmod_real(x, y, ctx));
    }
    None
}

/// Kind-fixed fast path for integer left operands: widens through the
/// tower like the dispatcher, against the ambient context.
pub fn integer_divmod(x: &Number, y: &Number) -> Option<Result<(Number, Number)>> {
    if x.is_integer() && y.is_integer() {
        return Some(divmod_integer(x, y));
    }
    if x.is_rational() && y.is_rational() {
        return Some(divmod_rational(x, y));
    }
    if x.is_real() && y.is_real() {
        return Some(context::with_current(|ctx| divmod_real(x, y, ctx)));
    }
    None
}

/// Kind-fixed fast path for rational left operands.
pub fn rational_divmod(x: &Number, y: &Number) -> Option<Result<(Number, Number)>> {
    if x.is_rational() && y.is_rational() {
        return Some(divmod_rational(x, y));
    }
    if x.is_real() && y.is_real() {
        return Some(context::with_current(|ctx| divmod_real(x, y, ctx)));
    }
    None
}

/// Kind-fixed fast path for real left operands.
pub fn real_divmod(x: &Number, y: &Number) -> Option<Result<(Number, Number)>> {
    if x.is_real() && y.is_real() {
        return Some(context::with_current(|ctx| divmod_real(x, y, ctx)));
    }
    None
}

/// Kind-fixed fast path for complex operands. Floor division is
/// undefined for complex numbers, so this always fails.
pub fn complex_divmod(_x: &Number, _y: &Number) -> Option<Result<(Number, Number)>> {
    Some(Err(Error::type_error(
        OP,
        "can't take floor or mod of complex number",
    )))
}

/// Module-level entry point over the ambient context. Requires exactly
/// two arguments; a dispatch miss is reported as a type error here
/// rather than propagated as "not applicable".
pub fn divmod(args: &[Number]) -> Result<(Number, Number)> {
    if args.len() != 2 {
        return Err(Error::arity_named(OP, 2, args.len()));
    }
    context::with_current(|ctx| dispatch_or_type_error(&args[0], &args[1], ctx))
}

fn dispatch_or_type_error(x: &Number, y: &Number, ctx: &mut Context) -> Result<(Number, Number)> {
    match number_divmod(x, y, ctx) {
        Some(result) => result,
        None => Err(Error::type_error(OP, "argument type not supported")),
    }
}

impl Context {
    /// Context-bound divmod entry point. Requires exactly two
    /// arguments. A read-only context is cloned first so the caller's
    /// shared context is never mutated in place; flag updates land on
    /// the private copy.
    pub fn divmod(&mut self, args: &[Number]) -> Result<(Number, Number)> {
        if args.len() != 2 {
            return Err(Error::arity_named(OP, 2, args.len()));
        }
        if self.is_readonly() {
            let mut scratch = self.clone();
            scratch.set_readonly(false);
            dispatch_or_type_error(&args[0], &args[1], &mut scratch)
        } else {
            dispatch_or_type_error(&args[0], &args[1], self)
        }
    }
}
