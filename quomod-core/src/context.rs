// quomod-core - Numeric context: precision, rounding, flags and traps
// Copyright (c) 2026 Tom Waddington. MIT licensed.

//! The numeric context shared by real-number operations.
//!
//! A `Context` carries the working precision, the rounding mode, the
//! exponent range and five condition flags, each paired with a trap
//! enable. Flags are sticky: an operation sets a flag when the matching
//! condition occurs and nothing in this crate ever clears it; clearing
//! is the context owner's job (`Context::clear_flags`).
//!
//! Contexts are not shareable between threads mid-operation. The
//! ambient context used by the kind-fixed fast paths is thread-local;
//! callers that need concurrency use one context per thread.

use std::cell::RefCell;
use std::cmp::Ordering;

use quomod_num::{Float, Round, Special};

use crate::error::{Error, Result};

/// Condition flags raised by real-number operations.
///
/// Sticky: set when the condition occurs, never cleared by operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Divisor was zero
    pub divide_by_zero: bool,
    /// NaN or infinite operands made the result undefined
    pub invalid: bool,
    /// Result fell below the exponent range
    pub underflow: bool,
    /// Result exceeded the exponent range
    pub overflow: bool,
    /// Result was rounded
    pub inexact: bool,
}

impl Flags {
    /// Reset every flag.
    pub fn clear(&mut self) {
        *self = Flags::default();
    }

    /// Check if any flag is set.
    pub fn any(self) -> bool {
        self.divide_by_zero || self.invalid || self.underflow || self.overflow || self.inexact
    }

    /// Sticky-OR the conditions raised by one operation into this set.
    pub(crate) fn merge(&mut self, other: Flags) {
        self.divide_by_zero |= other.divide_by_zero;
        self.invalid |= other.invalid;
        self.underflow |= other.underflow;
        self.overflow |= other.overflow;
        self.inexact |= other.inexact;
    }
}

/// Trap enables, one per condition flag.
///
/// With a trap enabled the matching condition aborts the operation with
/// an error instead of returning a result. All traps default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traps {
    pub divide_by_zero: bool,
    pub invalid: bool,
    pub underflow: bool,
    pub overflow: bool,
    pub inexact: bool,
}

/// Mutable numeric context for real-number operations.
#[derive(Debug, Clone)]
pub struct Context {
    precision: u32,
    round: Round,
    emin: i32,
    emax: i32,
    subnormalize: bool,
    readonly: bool,
    /// Sticky condition flags
    pub flags: Flags,
    /// Trap enables
    pub traps: Traps,
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

impl Context {
    /// Create a context with the default settings: 53-bit precision,
    /// round to nearest, the full exponent range, no subnormalization,
    /// all flags clear, all traps disabled.
    pub fn new() -> Self {
        Context {
            precision: 53,
            round: Round::Nearest,
            emin: rug::float::exp_min(),
            emax: rug::float::exp_max(),
            subnormalize: false,
            readonly: false,
            flags: Flags::default(),
            traps: Traps::default(),
        }
    }

    /// Create a context matching an IEEE 754 interchange format of the
    /// given bit width: 16, 32, 64, 128, or a multiple of 32 above 128.
    /// Sets precision, exponent range and gradual underflow accordingly.
    pub fn ieee(width: u32) -> Result<Self> {
        let precision = match width {
            16 => 11,
            32 => 24,
            64 => 53,
            128 => 113,
            w if w > 128 && w % 32 == 0 => {
                let bits = (4.0 * f64::from(w).log2()).round() as u32;
                w - bits + 13
            }
            _ => {
                return Err(Error::InvalidValue {
                    what: "ieee width",
                    message: "width must be 16, 32, 64, 128, or a multiple of 32 above 128",
                });
            }
        };
        let shift = width - precision - 1;
        if shift >= 31 {
            return Err(Error::InvalidValue {
                what: "ieee width",
                message: "exponent range too large",
            });
        }
        let emax = 1i32 << shift;
        let mut ctx = Context::new();
        ctx.precision = precision;
        ctx.emax = emax;
        ctx.emin = 4 - emax - precision as i32;
        ctx.subnormalize = true;
        Ok(ctx)
    }

    /// The working precision in bits.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Set the working precision in bits.
    pub fn set_precision(&mut self, prec: u32) -> Result<()> {
        if prec < rug::float::prec_min() || prec > rug::float::prec_max() {
            return Err(Error::InvalidValue {
                what: "precision",
                message: "precision out of range",
            });
        }
        self.precision = prec;
        Ok(())
    }

    /// The rounding mode.
    pub fn rounding(&self) -> Round {
        self.round
    }

    /// Set the rounding mode.
    pub fn set_rounding(&mut self, round: Round) {
        self.round = round;
    }

    /// The exponent range as (emin, emax).
    pub fn exp_range(&self) -> (i32, i32) {
        (self.emin, self.emax)
    }

    /// Set the exponent range. `emin` must be negative and `emax`
    /// positive, both within the range the float library supports.
    pub fn set_exp_range(&mut self, emin: i32, emax: i32) -> Result<()> {
        if emin >= 0 || emax <= 0 || emin < rug::float::exp_min() || emax > rug::float::exp_max() {
            return Err(Error::InvalidValue {
                what: "exponent range",
                message: "emin must be negative and emax positive, within library bounds",
            });
        }
        self.emin = emin;
        self.emax = emax;
        Ok(())
    }

    /// Whether gradual underflow (subnormal results) is enabled.
    pub fn subnormalize(&self) -> bool {
        self.subnormalize
    }

    /// Enable or disable gradual underflow.
    pub fn set_subnormalize(&mut self, on: bool) {
        self.subnormalize = on;
    }

    /// Whether this context is read-only. Entry points bound to a
    /// read-only context operate on a private copy so the shared
    /// context is never mutated in place.
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Mark this context read-only (or writable again).
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Clear every sticky condition flag.
    pub fn clear_flags(&mut self) {
        self.flags.clear();
    }

    /// Clamp a freshly computed result into this context's exponent
    /// range, recording the conditions raised by the operation in
    /// `raised`. `dir` is the ternary rounding result of the operation
    /// that produced `val`.
    ///
    /// Overflow rounds to infinity or the largest finite value and
    /// full underflow to zero or the smallest representable magnitude,
    /// both directed by the rounding mode. In the gradual-underflow
    /// band, with subnormalization enabled, the value is re-rounded at
    /// the reduced precision a subnormal of that magnitude carries.
    pub(crate) fn enforce_range(&self, val: &mut Float, dir: Ordering, raised: &mut Flags) {
        if dir != Ordering::Equal {
            raised.inexact = true;
        }
        // Zero, infinities and NaN have no exponent and pass through.
        let Some(exp) = val.get_exp() else { return };

        if exp > self.emax {
            raised.overflow = true;
            raised.inexact = true;
            let neg = val.is_sign_negative();
            let to_infinity = match self.round {
                Round::Nearest => true,
                Round::Zero => false,
                Round::Up => !neg,
                Round::Down => neg,
                _ => true,
            };
            if to_infinity {
                let inf = if neg {
                    Special::NegInfinity
                } else {
                    Special::Infinity
                };
                *val = Float::with_val(self.precision, inf);
            } else {
                // Largest finite value: (1 - 2^-prec) * 2^emax.
                let mut largest = Float::with_val(self.precision, 1);
                largest -= Float::with_val(self.precision, 1) >> self.precision as i32;
                largest <<= self.emax;
                if neg {
                    largest = -largest;
                }
                *val = largest;
            }
        } else if exp < self.emin {
            // The whole value sits below the smallest representable
            // magnitude 2^(emin-1).
            raised.underflow = true;
            raised.inexact = true;
            let neg = val.is_sign_negative();
            let smallest = Float::with_val(self.precision, 1) << (self.emin - 1);
            let keep_smallest = match self.round {
                Round::Nearest => {
                    // Ties at the halfway point go to the even
                    // endpoint, which is zero.
                    let half = Float::with_val(self.precision, 1) << (self.emin - 2);
                    val.clone().abs() > half
                }
                Round::Zero => false,
                Round::Up => !neg,
                Round::Down => neg,
                _ => false,
            };
            *val = if keep_smallest {
                if neg { -smallest } else { smallest }
            } else {
                let zero = if neg { Special::NegZero } else { Special::Zero };
                Float::with_val(self.precision, zero)
            };
        } else if self.subnormalize && exp < self.emin + self.precision as i32 - 1 {
            // Subnormal magnitude: only `keep` significand bits exist
            // at this exponent.
            let keep = ((exp - self.emin + 1) as u32).max(rug::float::prec_min());
            let d = val.set_prec_round(keep, self.round);
            val.set_prec(self.precision);
            if d != Ordering::Equal {
                raised.underflow = true;
                raised.inexact = true;
            }
        }
    }
}

thread_local! {
    static CURRENT: RefCell<Context> = RefCell::new(Context::new());
}

/// Run `f` with exclusive access to the calling thread's current
/// context. Not reentrant: `f` must not call back into `with_current`.
pub fn with_current<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    CURRENT.with(|c| f(&mut c.borrow_mut()))
}

/// Snapshot of the calling thread's current context.
pub fn current() -> Context {
    CURRENT.with(|c| c.borrow().clone())
}

/// Replace the calling thread's current context.
pub fn set_current(ctx: Context) {
    CURRENT.with(|c| *c.borrow_mut() = ctx);
}
