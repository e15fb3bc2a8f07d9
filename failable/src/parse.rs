//! Parsing integers from optional text, as an example of a fallible operation built on
//! [`Result`].

use alloc::string::{String, ToString};

use crate::errors::{
    self,
    Result::{self, Failure, Success},
};

/// Why a piece of text could not be turned into an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// There was no text at all.
    #[error("ParseError")]
    AbsentInput,
    /// The text was present but is not a well-formed integer.
    #[error("ParseError({0})")]
    MalformedInput(String),
}

impl errors::Error for ParseError {}

/// Parses `input` as a base-10 integer.
///
/// # Examples
///
/// ```
/// use failable::{parse, ParseError, Result::{Failure, Success}};
///
/// assert_eq!(parse(Some("42")), Success(42));
/// assert_eq!(parse(None), Failure(ParseError::AbsentInput));
/// assert_eq!(parse(Some("abc")), Failure(ParseError::MalformedInput("abc".into())));
/// ```
pub fn parse(input: Option<&str>) -> Result<i64, ParseError> {
    let Some(text) = input else {
        tracing::debug!("no input to parse");
        return Failure(ParseError::AbsentInput);
    };

    match text.parse::<i64>() {
        Ok(number) => Success(number),
        Err(error) => {
            tracing::debug!(input = text, %error, "input is not an integer");
            Failure(ParseError::MalformedInput(text.to_string()))
        }
    }
}
