//! Panic-on-condition checks.
//!
//! Unlike `assert!`, these always run (release builds included) and format
//! the failure as `Assertion failed: <message> - <detail>`.

use std::fmt::Debug;

/// Panic unless `expected == actual`
#[track_caller]
pub fn equal<T: PartialEq + Debug>(expected: T, actual: T, message: &str) {
    if expected != actual {
        panic!(
            "Assertion failed: {} - expected: {:?}, got: {:?}",
            message, expected, actual
        );
    }
}

/// Panic unless `condition` holds
#[track_caller]
pub fn is_true(condition: bool, message: &str) {
    if !condition {
        panic!("Assertion failed: {} - expected true, got false", message);
    }
}

/// Panic if `condition` holds
#[track_caller]
pub fn is_false(condition: bool, message: &str) {
    if condition {
        panic!("Assertion failed: {} - expected false, got true", message);
    }
}

/// Panic if `value` is `None`
#[track_caller]
pub fn is_some<T>(value: &Option<T>, message: &str) {
    if value.is_none() {
        panic!("Assertion failed: {} - value should not be None", message);
    }
}

/// Panic if `value` is `Some`
#[track_caller]
pub fn is_none<T: Debug>(value: &Option<T>, message: &str) {
    if let Some(v) = value {
        panic!("Assertion failed: {} - expected None, got {:?}", message, v);
    }
}

/// Panic unless `condition()` returns true
#[track_caller]
pub fn holds<F: FnOnce() -> bool>(condition: F, message: &str) {
    if !condition() {
        panic!("Assertion failed: {} - function returned false", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_checks_do_not_panic() {
        equal(1, 1, "numbers");
        is_true(true, "truth");
        is_false(false, "falsehood");
        is_some(&Some(1), "some");
        is_none::<i32>(&None, "none");
        holds(|| true, "closure");
    }

    #[test]
    #[should_panic(expected = "Assertion failed: ids - expected: \"a\", got: \"b\"")]
    fn test_equal_panics_with_message() {
        equal("a", "b", "ids");
    }

    #[test]
    #[should_panic(expected = "Assertion failed: flag - expected true, got false")]
    fn test_is_true_panics() {
        is_true(false, "flag");
    }

    #[test]
    #[should_panic(expected = "expected false, got true")]
    fn test_is_false_panics() {
        is_false(true, "flag");
    }

    #[test]
    #[should_panic(expected = "value should not be None")]
    fn test_is_some_panics() {
        is_some::<u8>(&None, "payload");
    }

    #[test]
    #[should_panic(expected = "expected None, got 5")]
    fn test_is_none_panics() {
        is_none(&Some(5), "payload");
    }

    #[test]
    #[should_panic(expected = "function returned false")]
    fn test_holds_panics() {
        holds(|| false, "check");
    }
}
