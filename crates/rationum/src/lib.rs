#![doc = include_str!("../../../README.md")]

mod error;
mod number;
mod types;

pub use crate::{
    error::NumberError,
    number::Number,
    types::{Decimal, Rational, RoundingMode},
};
