//! Input validation.

/// A predicate over values of type `T`.
///
/// Any `Fn(&T) -> bool` closure is a validator, so ad-hoc checks and named
/// validators such as [`NotEmpty`] can be passed to the same APIs.
///
/// ```
/// use strict_starter_core::validate::{NotEmpty, Validator};
///
/// fn all_valid<V: Validator<str>>(validator: &V, inputs: &[&str]) -> bool {
///     inputs.iter().all(|input| validator.validate(input))
/// }
///
/// assert!(all_valid(&NotEmpty, &["a", " b "]));
/// assert!(!all_valid(&|s: &str| s.len() < 3, &["ok", "too long"]));
/// ```
pub trait Validator<T: ?Sized> {
    /// `true` when `value` is acceptable.
    fn validate(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> bool,
{
    fn validate(&self, value: &T) -> bool {
        self(value)
    }
}

/// Accepts strings with at least one non-whitespace character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotEmpty;

impl Validator<str> for NotEmpty {
    fn validate(&self, value: &str) -> bool {
        is_not_empty(value)
    }
}

/// Returns `true` if `value` is non-empty once leading and trailing
/// whitespace is trimmed.
///
/// The byte-order mark (U+FEFF) counts as whitespace here.
pub fn is_not_empty(value: &str) -> bool {
    !value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}
