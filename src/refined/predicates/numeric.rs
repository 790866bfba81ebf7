//! Numeric predicates for refined types
//!
//! - [`Positive`]: value > 0
//! - [`NonNegative`]: value >= 0
//! - [`InRange<MIN, MAX>`]: MIN <= value <= MAX
//!
//! # Example
//!
//! ```rust
//! use formpatch::refined::{InRange, Refined};
//!
//! type Age = Refined<u8, InRange<18, 130>>;
//!
//! assert!(Age::new(42).is_ok());
//! assert!(Age::new(12).is_err());
//! ```

use super::super::Predicate;

/// Value must be positive (> 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

/// Value must be non-negative (>= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegative;

/// Value must be in range [MIN, MAX] (inclusive)
#[derive(Debug, Clone, Copy, Default)]
pub struct InRange<const MIN: i64, const MAX: i64>;

macro_rules! impl_sign_predicate {
    ($pred:ty, $zero:expr, $op:tt, $msg:expr, $desc:expr, [$($ty:ty),+]) => {
        $(
            impl Predicate<$ty> for $pred {
                type Error = &'static str;

                fn check(value: &$ty) -> Result<(), Self::Error> {
                    if *value $op $zero {
                        Ok(())
                    } else {
                        Err($msg)
                    }
                }

                fn description() -> &'static str {
                    $desc
                }
            }
        )+
    };
}

impl_sign_predicate!(
    Positive,
    0,
    >,
    "value must be positive",
    "positive number (> 0)",
    [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize]
);
impl_sign_predicate!(
    Positive,
    0.0,
    >,
    "value must be positive",
    "positive number (> 0)",
    [f32, f64]
);
impl_sign_predicate!(
    NonNegative,
    0,
    >=,
    "value must be non-negative",
    "non-negative number (>= 0)",
    [i8, i16, i32, i64, isize]
);
impl_sign_predicate!(
    NonNegative,
    0.0,
    >=,
    "value must be non-negative",
    "non-negative number (>= 0)",
    [f32, f64]
);

macro_rules! impl_in_range {
    ($($ty:ty),+) => {
        $(
            impl<const MIN: i64, const MAX: i64> Predicate<$ty> for InRange<MIN, MAX> {
                type Error = String;

                fn check(value: &$ty) -> Result<(), Self::Error> {
                    let v = i64::from(*value);
                    if (MIN..=MAX).contains(&v) {
                        Ok(())
                    } else {
                        Err(format!("value {} must be in range [{}, {}]", value, MIN, MAX))
                    }
                }

                fn description() -> &'static str {
                    "value in range [MIN, MAX]"
                }
            }
        )+
    };
}

impl_in_range!(i8, i16, i32, i64, u8, u16, u32);
