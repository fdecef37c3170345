//! Contains the implementations of the mathematical functions and constants.

pub(crate) mod arith;
pub(crate) mod combinatorics;
pub(crate) mod constants;
pub(crate) mod exp;
pub(crate) mod functions;
pub(crate) mod hyperbolic;
pub(crate) mod trig;
