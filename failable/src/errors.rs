use alloc::boxed::Box;
use core::fmt;

mod convert;

/// Marker for error payloads that can stand behind the default `Box<dyn Error>`.
pub trait Error: core::error::Error {}

/// The outcome of a fallible computation: either a value or the error that prevented it.
///
/// Exactly one payload is present. Every combinator consumes the instance and hands back
/// a new one, so a `Result` is never modified after construction.
///
/// `Display` prints `Result(<payload>)` for either variant, while `Debug` keeps the
/// variant name (`Success(42)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E = Box<dyn Error>> {
    Success(T),
    Failure(E),
}

impl<T, E> Result<T, E> {
    /// Returns `true` if this is a `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload, or `None` for a failure.
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The error payload, or `None` for a success.
    #[must_use]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows both payloads, so the accessors can be used without giving up `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::Result::{self, Success};
    ///
    /// let result: Result<i32, ()> = Success(7);
    /// assert_eq!(result.as_ref().value(), Some(&7));
    /// assert!(result.is_success());
    /// ```
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Transforms the success payload, leaving a failure untouched.
    ///
    /// `transform` is only called for a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::Result::{self, Failure, Success};
    ///
    /// let squared: Result<i32, &str> = Success(6).map(|x| x * x);
    /// assert_eq!(squared, Success(36));
    ///
    /// let failed: Result<i32, &str> = Failure("no input").map(|x: i32| x * x);
    /// assert_eq!(failed, Failure("no input"));
    /// ```
    pub fn map<U, F>(self, transform: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Result::Success(transform(value)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Chains a computation that can itself fail.
    ///
    /// On success the outcome of `transform` is returned as is, which lets a later step
    /// turn a success into a failure. A failure is carried forward and `transform` is
    /// never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::{parse, Result::Success};
    ///
    /// let sum = parse(Some("2")).flat_map(|a| parse(Some("3")).map(|b| a + b));
    /// assert_eq!(sum, Success(5));
    /// ```
    pub fn flat_map<U, F>(self, transform: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Returns the success payload, or the value produced by `default` for a failure.
    ///
    /// `default` runs at most once, and only when there is no value to return.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::parse;
    ///
    /// assert_eq!(parse(Some("42")).or_else(|| 0), 42);
    /// assert_eq!(parse(None).or_else(|| 0), 0);
    /// ```
    pub fn or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }
}

impl<T, E> fmt::Display for Result<T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Result({value})"),
            Self::Failure(error) => write!(f, "Result({error})"),
        }
    }
}
