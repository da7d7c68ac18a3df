//! A fixed-capacity LIFO stack of `f32` values for targets without an
//! allocator, plus a small postfix calculator built on it (`std` feature).

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod debug;
#[cfg(feature = "std")]
mod rpn;
mod stack;

#[cfg(feature = "std")]
pub use rpn::{CalcError, Calculator};
pub use stack::{BoundedStack, Full, DEFAULT_CAPACITY};
