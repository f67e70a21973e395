// quomod-num - Numeric tower value types for quomod
// Copyright (c) 2026 Tom Waddington. MIT licensed.

//! # quomod-num
//!
//! Value types for the quomod numeric tower. Defines `Number`, a tagged
//! union over arbitrary-precision integers, exact rationals, binary
//! floats and complex numbers, together with the kind classifier used
//! for operation dispatch.

pub mod value;

pub use rug::float::{Round, Special};
pub use rug::{Complex, Float, Integer, Rational};
pub use value::{Kind, Number};
