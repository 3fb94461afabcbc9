//! Function contracts supplied by callers.
//!
//! The lazy list never inspects the functions it is given; it only calls them
//! through the contracts defined here:
//!
//! - [`Producer`]: no input, one output
//! - [`Transformer`]: one input, one output
//! - [`Combiner`]: accumulator and element in, new accumulator out
//! - [`BooleanCondition`]: one input, `bool` out
//!
//! Closures satisfy the contracts directly, and [`identity`], [`constant`],
//! [`flip`] and [`negate`] build common ones.

mod contract;
mod utils;

pub use contract::{BooleanCondition, Combiner, Producer, Transformer};
pub use utils::{constant, flip, identity, negate};
