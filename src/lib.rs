//! Classic in-place sorting algorithms over `i32` slices.
//!
//! Every sort lives in its own module and exposes `pub fn sort(v: &mut [i32])`. Empty and
//! single-element slices are left untouched.

pub mod algorithm;
pub mod cli;
pub mod error;

pub mod stable;
pub mod unstable;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
