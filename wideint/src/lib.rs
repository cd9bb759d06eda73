//! The `wideint` crate defines [`WideInt`], a fixed-width
//! two's-complement signed integer of 2032 bits.  The idea is that if
//! you need integer arithmetic well beyond the native machine word
//! but with the predictable wraparound behaviour of a native type,
//! you can depend on this crate without pulling in an
//! arbitrary-precision library.

mod twoscomplement;

pub use crate::twoscomplement::error::{ConversionFailed, DivisionByZero, ParseWideIntError};
pub use crate::twoscomplement::signed::WideInt;
pub use crate::twoscomplement::Sign;
