//! Lazy, memoized streams.
//!
//! See [`InfiniteList`] for the list type and its operators.

mod infinite_list;

pub use infinite_list::{ExhaustedError, InfiniteList, Iter};
