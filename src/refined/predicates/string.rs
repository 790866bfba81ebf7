//! String predicates for refined types
//!
//! - [`NonEmpty`]: string is not empty
//! - [`Trimmed`]: no leading or trailing whitespace
//! - [`MaxLength<N>`]: length <= N bytes
//! - [`MinLength<N>`]: length >= N bytes

use super::super::Predicate;

/// String must not be empty
///
/// # Example
///
/// ```rust
/// use formpatch::refined::{NonEmpty, Refined};
///
/// type Name = Refined<String, NonEmpty>;
///
/// assert!(Name::new("Alice".to_string()).is_ok());
/// assert!(Name::new("".to_string()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl Predicate<String> for NonEmpty {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if value.is_empty() {
            Err("string cannot be empty")
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "non-empty string"
    }
}

impl Predicate<&'static str> for NonEmpty {
    type Error = &'static str;

    fn check(value: &&'static str) -> Result<(), Self::Error> {
        if value.is_empty() {
            Err("string cannot be empty")
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "non-empty string"
    }
}

/// String has no leading or trailing whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct Trimmed;

impl Predicate<String> for Trimmed {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if value.trim() == value {
            Ok(())
        } else {
            Err("string has leading or trailing whitespace")
        }
    }

    fn description() -> &'static str {
        "trimmed string (no leading/trailing whitespace)"
    }
}

/// String length must be at most N bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLength<const N: usize>;

impl<const N: usize> Predicate<String> for MaxLength<N> {
    type Error = String;

    fn check(value: &String) -> Result<(), Self::Error> {
        if value.len() <= N {
            Ok(())
        } else {
            Err(format!(
                "string length {} exceeds maximum {}",
                value.len(),
                N
            ))
        }
    }

    fn description() -> &'static str {
        "string with maximum length"
    }
}

/// String length must be at least N bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLength<const N: usize>;

impl<const N: usize> Predicate<String> for MinLength<N> {
    type Error = String;

    fn check(value: &String) -> Result<(), Self::Error> {
        if value.len() >= N {
            Ok(())
        } else {
            Err(format!(
                "string length {} is less than minimum {}",
                value.len(),
                N
            ))
        }
    }

    fn description() -> &'static str {
        "string with minimum length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refined::Refined;

    type NonEmptyString = Refined<String, NonEmpty>;
    type TrimmedString = Refined<String, Trimmed>;
    type ShortString = Refined<String, MaxLength<10>>;
    type LongEnough = Refined<String, MinLength<3>>;

    #[test]
    fn test_non_empty() {
        assert!(NonEmptyString::new("a".to_string()).is_ok());
        // whitespace is not empty
        assert!(NonEmptyString::new(" ".to_string()).is_ok());
        assert_eq!(
            NonEmptyString::new(String::new()).unwrap_err(),
            "string cannot be empty"
        );
    }

    #[test]
    fn test_non_empty_static_str() {
        assert!(Refined::<&'static str, NonEmpty>::new("John").is_ok());
        assert!(Refined::<&'static str, NonEmpty>::new("").is_err());
    }

    #[test]
    fn test_trimmed() {
        assert!(TrimmedString::new("hello world".to_string()).is_ok());
        assert!(TrimmedString::new(String::new()).is_ok());
        assert!(TrimmedString::new(" hello".to_string()).is_err());
        assert!(TrimmedString::new("hello\n".to_string()).is_err());
    }

    #[test]
    fn test_max_length() {
        assert!(ShortString::new("1234567890".to_string()).is_ok());
        assert_eq!(
            ShortString::new("12345678901".to_string()).unwrap_err(),
            "string length 11 exceeds maximum 10"
        );
    }

    #[test]
    fn test_min_length() {
        assert!(LongEnough::new("abc".to_string()).is_ok());
        assert_eq!(
            LongEnough::new("ab".to_string()).unwrap_err(),
            "string length 2 is less than minimum 3"
        );
    }
}
