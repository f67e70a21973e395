// quomod-core - Floor division with remainder over the quomod numeric tower
// Copyright (c) 2026 Tom Waddington. MIT licensed.

//! # quomod-core
//!
//! Floor division with remainder (`divmod`) over a numeric tower of
//! arbitrary-precision integers, exact rationals, binary floats and
//! complex numbers, with a mutable numeric context carrying rounding
//! mode, working precision and sticky condition flags with traps.

pub mod context;
pub mod divmod;
pub mod error;

pub use context::{current, set_current, with_current, Context, Flags, Traps};
pub use divmod::{
    complex_divmod, divmod, integer_divmod, number_divmod, rational_divmod, real_divmod,
};
pub use error::{Error, Result};

// Re-export value types for convenience
pub use quomod_num::{Complex, Float, Integer, Kind, Number, Rational, Round, Special};
