//! Value selection helpers.
//!
//! "Zero" here means `T::default()`.

/// Pick `when_true` or `when_false` depending on `condition`
pub fn if_then_else<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition {
        when_true
    } else {
        when_false
    }
}

/// Return `primary` unless it is the default value, otherwise `fallback`
pub fn fallback<T: Default + PartialEq>(primary: T, fallback: T) -> T {
    if primary != T::default() {
        primary
    } else {
        fallback
    }
}

/// Like [`fallback`], but the fallback is computed only when needed
pub fn fallback_with<T, F>(primary: T, fallback: F) -> T
where
    T: Default + PartialEq,
    F: FnOnce() -> T,
{
    if primary != T::default() {
        primary
    } else {
        fallback()
    }
}

/// First `Some` in `values`, or `None` if every entry is empty
pub fn first_some<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

/// First value that is not the default, or the default if none is
pub fn first_non_default<T, I>(values: I) -> T
where
    T: Default + PartialEq,
    I: IntoIterator<Item = T>,
{
    let zero = T::default();
    values.into_iter().find(|v| *v != zero).unwrap_or(zero)
}

/// First element satisfying `predicate`
pub fn first_match<T, F>(input: &[T], predicate: F) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    input.iter().find(|v| predicate(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_then_else() {
        assert_eq!(if_then_else(true, "yes", "no"), "yes");
        assert_eq!(if_then_else(false, "yes", "no"), "no");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(fallback(String::new(), "default".to_string()), "default");
        assert_eq!(fallback("set".to_string(), "default".to_string()), "set");
        assert_eq!(fallback(0, 7), 7);
    }

    #[test]
    fn test_fallback_with_is_lazy() {
        let value = fallback_with(3, || panic!("should not be called"));
        assert_eq!(value, 3);
        assert_eq!(fallback_with(0, || 9), 9);
    }

    #[test]
    fn test_first_some() {
        assert_eq!(first_some([None, Some(2), Some(3)]), Some(2));
        assert_eq!(first_some::<i32, _>([None, None]), None);
    }

    #[test]
    fn test_first_non_default() {
        assert_eq!(first_non_default(["", "", "b", "c"]), "b");
        assert_eq!(first_non_default([0, 0]), 0);
        assert_eq!(first_non_default(Vec::<u8>::new()), 0);
    }

    #[test]
    fn test_first_match() {
        let numbers = [1, 4, 6, 7];
        assert_eq!(first_match(&numbers, |n| n % 2 == 0), Some(&4));
        assert_eq!(first_match(&numbers, |n| *n > 10), None);
    }
}
