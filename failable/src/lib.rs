#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![cfg_attr(feature = "try-trait", feature(try_trait_v2, try_trait_v2_residual))]

extern crate alloc;

pub mod errors;
pub mod parse;

pub use errors::{
    Error,
    Result::{self, Failure, Success},
};
pub use parse::{ParseError, parse};
