//! Building blocks for deferred computation.
//!
//! - [`Maybe`]: a value that may be absent, without nulls
//! - [`Lazy`]: a memoizing deferred value
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::control::{Lazy, Maybe};
//!
//! let slot = Lazy::new(|| Maybe::some(42));
//! assert!(!slot.is_initialized());
//!
//! assert_eq!(slot.value(), Maybe::some(42));
//! assert!(slot.is_initialized());
//! ```

mod lazy;
mod maybe;

pub use lazy::{Lazy, LazyError, LazyState};
pub use maybe::{EmptyValueError, Maybe};
