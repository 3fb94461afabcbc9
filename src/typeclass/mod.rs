//! Type class traits for the crate's container types.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation
//! - [`Functor`]: mapping over a context
//! - [`Applicative`]: combining independent values in a context
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: reducing a structure to a summary value
//!
//! [`Maybe`](crate::control::Maybe) implements all of them.
//! [`InfiniteList`](crate::stream::InfiniteList) implements `Foldable`; its
//! `map` and `filter` are inherent methods because they call their function
//! once per element.
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::control::Maybe;
//! use lazy_stream::typeclass::{Applicative, Functor};
//!
//! let width = Maybe::some(6).fmap(|x| x + 1);
//! let area = width.map2(Maybe::some(6), |w, h| w * h);
//! assert_eq!(area, Maybe::some(42));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
