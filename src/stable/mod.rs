//! Sorts that keep equal elements in their original order.

pub mod bubble;
pub mod insertion;
pub mod mergesort;
