//! Crate-wide error type.
//!
//! Each module reports its own narrow error ([`ExhaustedError`],
//! [`EmptyValueError`], [`LazyError`]); [`Error`] unifies them so callers
//! mixing operations can use `?` throughout.
//!
//! # Examples
//!
//! ```rust
//! use lazy_stream::error::Error;
//! use lazy_stream::stream::InfiniteList;
//!
//! fn second_even() -> Result<u32, Error> {
//!     let evens = InfiniteList::iterate(1, |x| x + 1).filter(|x| x % 2 == 0);
//!     Ok(evens.tail()?.head()?)
//! }
//!
//! assert_eq!(second_even().ok(), Some(4));
//! ```

use crate::control::{EmptyValueError, LazyError};
use crate::stream::ExhaustedError;

/// Any failure raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `head` or `tail` found no retained element.
    #[error(transparent)]
    Exhausted(#[from] ExhaustedError),
    /// The payload of an empty `Maybe` was requested.
    #[error(transparent)]
    EmptyValue(#[from] EmptyValueError),
    /// A lazy value could not be evaluated.
    #[error(transparent)]
    Lazy(#[from] LazyError),
}

/// A `Result` specialized to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Lazy, Maybe};
    use crate::stream::InfiniteList;
    use rstest::rstest;

    fn first_payload(list: &InfiniteList<Maybe<i32>>) -> Result<i32> {
        let slot = list.head()?;
        Ok(slot.into_value()?)
    }

    #[rstest]
    fn exhausted_list_converts() {
        let empty: InfiniteList<Maybe<i32>> = InfiniteList::sentinel();
        assert_eq!(first_payload(&empty), Err(Error::Exhausted(ExhaustedError)));
    }

    #[rstest]
    fn empty_payload_converts() {
        let list: InfiniteList<Maybe<i32>> = std::iter::once(Maybe::none()).collect();
        assert_eq!(first_payload(&list), Err(Error::EmptyValue(EmptyValueError)));
    }

    #[rstest]
    fn poisoned_lazy_converts() {
        let lazy: Lazy<i32> = Lazy::new(|| panic!("producer failed"));
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| lazy.value()));

        let forced: Result<i32> = lazy.try_force().map(|value| *value).map_err(Error::from);
        assert_eq!(forced, Err(Error::Lazy(LazyError::Poisoned)));
    }
}
