//! # Operations
//!
//! Forward operations recorded on a [`Graph`](crate::autograd::Graph). Each one computes
//! its result from the operand values, appends a node that remembers the operands, and
//! tags it with the [`Op`](crate::autograd::Op) whose rule the backward pass applies.
//!
//! Every operand accepts a node handle or an `f64` literal (see [`Operand`]).

pub mod activation;
pub mod arithmetic;
pub mod operand;
pub mod reduction;

pub use operand::{Exponent, Operand};
