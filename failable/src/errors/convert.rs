#[cfg(feature = "try-trait")]
use core::{
    convert::Infallible,
    ops::{ControlFlow, FromResidual, Residual, Try},
};

use super::Result::{self, Failure, Success};

impl<T, E> Result<T, E> {
    /// Converts into the standard library's result, for use with `?` and `std` APIs.
    ///
    /// # Errors
    ///
    /// Returns `Err` carrying the error payload when `self` is a `Failure`.
    pub fn into_result(self) -> core::result::Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_result()
    }
}

#[cfg(feature = "try-trait")]
impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = Result<Infallible, E>;

    #[inline]
    fn from_output(output: Self::Output) -> Self {
        Success(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Success(value) => ControlFlow::Continue(value),
            Failure(error) => ControlFlow::Break(Failure(error)),
        }
    }
}

#[cfg(feature = "try-trait")]
impl<T, E> Residual<T> for Result<Infallible, E> {
    type TryType = Result<T, E>;
}

#[cfg(feature = "try-trait")]
impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for Result<T, F> {
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Failure(error) => Failure(From::from(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::Result::{self, Failure, Success};

    #[test]
    fn test_from_std_result() {
        let ok: core::result::Result<u8, &str> = Ok(1);
        let err: core::result::Result<u8, &str> = Err("broken");

        assert_eq!(Result::from(ok), Success(1));
        assert_eq!(Result::from(err), Failure("broken"));
    }

    #[test]
    fn test_into_std_result() {
        assert_eq!(Success::<u8, &str>(1).into_result(), Ok(1));
        assert_eq!(Failure::<u8, &str>("broken").into_result(), Err("broken"));

        let converted: core::result::Result<u8, &str> = Failure("broken").into();
        assert_eq!(converted, Err("broken"));
    }

    #[cfg(feature = "try-trait")]
    #[test]
    fn test_question_mark_propagates_failure() {
        fn add(
            a: Result<i32, &'static str>,
            b: Result<i32, &'static str>,
        ) -> Result<i32, &'static str> {
            Success(a? + b?)
        }

        assert_eq!(add(Success(2), Success(3)), Success(5));
        assert_eq!(add(Success(2), Failure("right")), Failure("right"));
        assert_eq!(add(Failure("left"), Failure("right")), Failure("left"));
    }
}
