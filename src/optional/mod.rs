//! Explicit optional values.
//!
//! This module provides:
//!
//! - [`OptionalValue`]: a value that is either present or absent
//! - [`IntoOptionalValue`]: `.into_optional_value()` for native `Option`s
//!
//! Every operation on [`OptionalValue`] is total. Combinators that take a
//! closure only call it when the value they need is actually there, so
//! chaining and fallbacks short-circuit the same way `?` and `Option::or_else`
//! do for the native type.

mod convert;

pub use convert::IntoOptionalValue;

/// A value that is either present or absent.
///
/// The two variants are public, so callers can branch on presence with an
/// ordinary `match`:
///
/// ```rust
/// use coalesce::OptionalValue;
///
/// let greeting = OptionalValue::present("hello");
/// let shout = match greeting {
///     OptionalValue::Present(text) => text.to_uppercase(),
///     OptionalValue::Absent => String::new(),
/// };
/// assert_eq!(shout, "HELLO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalValue<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> OptionalValue<T> {
    /// Wraps a value.
    pub const fn present(value: T) -> Self {
        OptionalValue::Present(value)
    }

    /// Creates an empty value.
    pub const fn absent() -> Self {
        OptionalValue::Absent
    }

    /// Returns `true` if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, OptionalValue::Present(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the payload, leaving `self` untouched.
    pub fn as_ref(&self) -> OptionalValue<&T> {
        match self {
            OptionalValue::Present(value) => OptionalValue::Present(value),
            OptionalValue::Absent => OptionalValue::Absent,
        }
    }

    /// Transforms the payload with `f`.
    ///
    /// `f` is not called when the value is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coalesce::OptionalValue;
    ///
    /// assert_eq!(OptionalValue::present(2).map(|n| n * 10), OptionalValue::present(20));
    /// assert_eq!(OptionalValue::<i32>::absent().map(|n| n * 10), OptionalValue::absent());
    /// ```
    pub fn map<U, F>(self, f: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OptionalValue::Present(value) => OptionalValue::Present(f(value)),
            OptionalValue::Absent => OptionalValue::Absent,
        }
    }

    /// Continues with `f` when a value is present.
    ///
    /// `f` itself returns an [`OptionalValue`], and that result is returned
    /// directly, so a chain of lookups never nests. The chain stops at the
    /// first absent link; `f` is not called when the value is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coalesce::OptionalValue;
    ///
    /// fn half(n: u32) -> OptionalValue<u32> {
    ///     if n % 2 == 0 { OptionalValue::present(n / 2) } else { OptionalValue::absent() }
    /// }
    ///
    /// assert_eq!(OptionalValue::present(8).flat_map(half).flat_map(half), OptionalValue::present(2));
    /// assert_eq!(OptionalValue::present(6).flat_map(half).flat_map(half), OptionalValue::absent());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> OptionalValue<U>,
    {
        match self {
            OptionalValue::Present(value) => f(value),
            OptionalValue::Absent => OptionalValue::Absent,
        }
    }

    /// Returns `self` if present, otherwise the value produced by `fallback`.
    ///
    /// The fallback is a deferred computation: it runs only when `self` is
    /// absent. Its result may itself be absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coalesce::OptionalValue;
    ///
    /// let configured = OptionalValue::present("dark");
    /// let detected = || OptionalValue::present("light");
    /// assert_eq!(configured.or_else(detected), OptionalValue::present("dark"));
    ///
    /// let unset: OptionalValue<&str> = OptionalValue::absent();
    /// assert_eq!(unset.or_else(detected), OptionalValue::present("light"));
    /// ```
    pub fn or_else<F>(self, fallback: F) -> OptionalValue<T>
    where
        F: FnOnce() -> OptionalValue<T>,
    {
        match self {
            OptionalValue::Present(value) => OptionalValue::Present(value),
            OptionalValue::Absent => fallback(),
        }
    }

    /// Returns the payload, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            OptionalValue::Present(value) => value,
            OptionalValue::Absent => default,
        }
    }

    /// Returns the payload, or computes one with `default` when absent.
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            OptionalValue::Present(value) => value,
            OptionalValue::Absent => default(),
        }
    }

    /// Collapses both variants into a single value.
    ///
    /// Exactly one of the two closures runs.
    pub fn fold<U, P, A>(self, present: P, absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self {
            OptionalValue::Present(value) => present(value),
            OptionalValue::Absent => absent(),
        }
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        OptionalValue::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_present_and_absent_constructors() {
        assert_eq!(OptionalValue::present(3), OptionalValue::Present(3));
        assert_eq!(OptionalValue::<u8>::absent(), OptionalValue::Absent);
        assert!(OptionalValue::present(()).is_present());
        assert!(OptionalValue::<()>::absent().is_absent());
    }

    #[test]
    fn test_default_is_absent() {
        assert_eq!(OptionalValue::<String>::default(), OptionalValue::Absent);
    }

    #[test]
    fn test_as_ref_borrows_payload() {
        let name = OptionalValue::present(String::from("mauve"));
        assert_eq!(name.as_ref().map(|s| s.len()), OptionalValue::present(5));
        // Still usable after borrowing
        assert_eq!(name, OptionalValue::present(String::from("mauve")));
    }

    #[test]
    fn test_map_present() {
        let calls = Cell::new(0);
        let result = OptionalValue::present(4).map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(result, OptionalValue::present(5));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_absent_skips_function() {
        let calls = Cell::new(0);
        let result = OptionalValue::<i32>::absent().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(result, OptionalValue::absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_flat_map_returns_inner_result_directly() {
        let present: OptionalValue<OptionalValue<u8>> = OptionalValue::present(OptionalValue::absent());
        assert_eq!(present.flat_map(|inner| inner), OptionalValue::absent());

        let chained = OptionalValue::present(1).flat_map(|n| OptionalValue::present(n * 7));
        assert_eq!(chained, OptionalValue::present(7));
    }

    #[test]
    fn test_flat_map_absent_skips_function() {
        let calls = Cell::new(0);
        let result = OptionalValue::<u8>::absent().flat_map(|n| {
            calls.set(calls.get() + 1);
            OptionalValue::present(n)
        });
        assert_eq!(result, OptionalValue::absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_flat_map_chain_stops_at_first_absent_link() {
        let calls = Cell::new(0);
        let result = OptionalValue::present(1)
            .flat_map(|_| OptionalValue::<u8>::absent())
            .flat_map(|n| {
                calls.set(calls.get() + 1);
                OptionalValue::present(n)
            });
        assert_eq!(result, OptionalValue::absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_or_else_present_skips_fallback() {
        let calls = Cell::new(0);
        let result = OptionalValue::present("avatar").or_else(|| {
            calls.set(calls.get() + 1);
            OptionalValue::present("theme")
        });
        assert_eq!(result, OptionalValue::present("avatar"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_or_else_absent_evaluates_fallback_once() {
        let calls = Cell::new(0);
        let result = OptionalValue::absent().or_else(|| {
            calls.set(calls.get() + 1);
            OptionalValue::present("theme")
        });
        assert_eq!(result, OptionalValue::present("theme"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_else_fallback_may_be_absent() {
        let result: OptionalValue<u8> = OptionalValue::absent().or_else(OptionalValue::absent);
        assert_eq!(result, OptionalValue::absent());
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(OptionalValue::present(9).unwrap_or(0), 9);
        assert_eq!(OptionalValue::absent().unwrap_or(0), 0);
    }

    #[test]
    fn test_unwrap_or_else_only_runs_when_absent() {
        let calls = Cell::new(0);
        let value = OptionalValue::present(9).unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 9);
        assert_eq!(calls.get(), 0);

        assert_eq!(OptionalValue::absent().unwrap_or_else(|| 42), 42);
    }

    #[test]
    fn test_fold_runs_exactly_one_branch() {
        let label = OptionalValue::present(3).fold(|n| format!("got {n}"), || "nothing".to_string());
        assert_eq!(label, "got 3");

        let label = OptionalValue::<u8>::absent().fold(|n| format!("got {n}"), || "nothing".to_string());
        assert_eq!(label, "nothing");
    }
}
