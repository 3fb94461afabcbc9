//! # lazy-stream
//!
//! Lazily evaluated, memoized, potentially infinite lists for Rust.
//!
//! ## Overview
//!
//! - **Maybe**: a null-free optional value, the slot type of list elements
//! - **Lazy**: a deferred value computed at most once and then cached
//! - **`InfiniteList`**: a cons list whose head and tail are both lazy, with
//!   `generate`, `iterate`, `map`, `filter`, `limit`, `take_while`, `reduce`,
//!   `count` and `to_list`
//! - **Function contracts**: `Producer`, `Transformer`, `Combiner` and
//!   `BooleanCondition`, satisfied by ordinary closures
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and `Foldable`
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): type class traits
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazy_stream::prelude::*;
//!
//! let evens = InfiniteList::iterate(1, |x| x + 1).filter(|x| x % 2 == 0);
//! assert_eq!(evens.head(), Ok(2));
//! assert_eq!(evens.limit(3).to_list(), vec![2, 4, 6]);
//!
//! let sum = InfiniteList::iterate(1, |x| x + 1)
//!     .take_while(|x| *x <= 4)
//!     .reduce(0, |accumulator, x| accumulator + x);
//! assert_eq!(sum, 10);
//! ```
//!
//! ## Logging
//!
//! Evaluation is instrumented with [`tracing`]: producer runs and
//! skip-forward searches are reported at `TRACE`, failed accesses at `DEBUG`.
//! Nothing is emitted unless the application installs a subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use lazy_stream::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::Error;
    pub use crate::function::*;
    pub use crate::stream::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;
pub mod error;
pub mod function;
pub mod stream;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::Error;
