// quomod-core - Property-based tests for divmod
// Copyright (c) 2026 Tom Waddington. MIT licensed.

//! Property-based tests for floor division with remainder.
//!
//! Tests the following properties:
//! - Integer: x == q*y + r, |r| < |y|, r zero or with y's sign, both
//!   on the single-limb fast path and the multi-limb general path
//! - Rational: the same identity exactly, quotient an Integer
//! - Real: exact identity for word-sized integer operands, where no
//!   rounding can occur
//! - Zero divisors always fail for the exact kinds

use proptest::prelude::*;
use quomod_core::{divmod, number_divmod, Context, Error, Integer, Number, Rational};
use std::cmp::Ordering;

// =============================================================================
// Strategies
// =============================================================================

/// Arbitrary i64 dividends
fn arb_int() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Arbitrary nonzero i64 divisors
fn arb_nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..=i64::MAX, i64::MIN..=-1i64]
}

/// Nonzero values small enough for exact f64 embedding
fn arb_nonzero_word() -> impl Strategy<Value = i32> {
    prop_oneof![1i32..=i32::MAX, i32::MIN..=-1i32]
}

fn check_integer_identity(x: &Integer, y: &Integer, q: &Integer, r: &Integer) {
    assert_eq!(
        Integer::from(q * y) + r,
        *x,
        "identity for {} divmod {}",
        x,
        y
    );
    assert!(
        Integer::from(r.abs_ref()) < Integer::from(y.abs_ref()),
        "|r| < |y| for {} divmod {}",
        x,
        y
    );
    assert!(
        r.cmp0() == Ordering::Equal || r.cmp0() == y.cmp0(),
        "remainder sign for {} divmod {}",
        x,
        y
    );
}

fn unwrap_pair(pair: (Number, Number)) -> (Integer, Number) {
    match pair {
        (Number::Integer(q), r) => (q, r),
        other => panic!("expected integer quotient, got {:?}", other),
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Word-sized divisors: the single-limb fast path keeps floor
    /// semantics.
    #[test]
    fn integer_identity_word_divisor(x in arb_int(), y in arb_nonzero_word()) {
        let xz = Integer::from(x);
        let yz = Integer::from(y);
        let (q, r) = unwrap_pair(divmod(&[Number::from(x), Number::integer(y)]).unwrap());
        let r = match r {
            Number::Integer(r) => r,
            other => panic!("expected integer remainder, got {:?}", other),
        };
        check_integer_identity(&xz, &yz, &q, &r);
    }

    /// Multi-limb operands: the general path agrees with the identity.
    #[test]
    fn integer_identity_multi_limb(x in arb_int(), y in arb_nonzero(), shift in 40u32..120) {
        let xz = Integer::from(x) << shift;
        let yz = Integer::from(y) << (shift / 2);
        let (q, r) = unwrap_pair(
            divmod(&[
                Number::Integer(xz.clone()),
                Number::Integer(yz.clone()),
            ])
            .unwrap(),
        );
        let r = match r {
            Number::Integer(r) => r,
            other => panic!("expected integer remainder, got {:?}", other),
        };
        check_integer_identity(&xz, &yz, &q, &r);
    }

    /// Rational divmod: exact identity, integer quotient, remainder
    /// with the divisor's sign.
    #[test]
    fn rational_identity(
        xn in -10_000i64..10_000,
        xd in 1i64..1_000,
        yn in arb_nonzero_word(),
        yd in 1i64..1_000,
    ) {
        let x = Rational::from((xn, xd));
        let y = Rational::from((i64::from(yn), yd));
        let (q, r) = divmod(&[
            Number::Rational(x.clone()),
            Number::Rational(y.clone()),
        ])
        .unwrap();
        let (q, r) = match (q, r) {
            (Number::Integer(q), Number::Rational(r)) => (q, r),
            other => panic!("expected (integer, rational), got {:?}", other),
        };
        let recomposed = Rational::from(&y * &q) + &r;
        prop_assert_eq!(&recomposed, &x);
        prop_assert!(Rational::from(r.abs_ref()) < Rational::from(y.abs_ref()));
        prop_assert!(r.cmp0() == Ordering::Equal || r.cmp0() == y.cmp0());
    }

    /// Real divmod on word-sized integers is exact: the quotient is
    /// the true floor and the identity holds with no rounding error.
    #[test]
    fn real_exact_for_word_operands(x in -1_000_000i32..1_000_000, y in arb_nonzero_word()) {
        let mut ctx = Context::new();
        let xr = Number::real(53, f64::from(x));
        let yr = Number::real(53, f64::from(y));
        let (q, r) = number_divmod(&xr, &yr, &mut ctx)
            .expect("real operands")
            .unwrap();

        let (expect_q, expect_r) = Integer::from(x).div_rem_floor(Integer::from(y));
        prop_assert_eq!(q, Number::Integer(expect_q));
        prop_assert_eq!(r, Number::Integer(expect_r));
    }

    /// Zero divisors are always fatal for the exact kinds.
    #[test]
    fn integer_zero_divisor_always_fails(x in arb_int()) {
        let err = divmod(&[Number::from(x), Number::from(0i64)]).unwrap_err();
        prop_assert!(
            matches!(err, Error::DivisionByZero { .. }),
            "expected Error::DivisionByZero"
        );
        let err = divmod(&[Number::rational(x, 7), Number::rational(0, 1)]).unwrap_err();
        prop_assert!(
            matches!(err, Error::DivisionByZero { .. }),
            "expected Error::DivisionByZero"
        );
    }
}
