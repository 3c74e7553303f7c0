//! Argument conversion for mixed-type joins.

use std::error::Error as StdError;

use crate::types::Error;

/// Converts one [`join!`](crate::join) argument into a chain member.
///
/// Mirrors the promotion rules of the chain model: strings become bare
/// message nodes, `None` arguments are dropped without leaving a hole in the
/// member list, and boxed foreign errors are adopted as leaves. Errors built
/// by this crate pass through unchanged.
pub trait JoinMember {
    /// Returns the member to store, or `None` to drop the argument.
    fn into_member(self) -> Option<Error>;
}

impl JoinMember for Error {
    #[inline]
    fn into_member(self) -> Option<Error> {
        Some(self)
    }
}

impl JoinMember for Option<Error> {
    #[inline]
    fn into_member(self) -> Option<Error> {
        self
    }
}

impl JoinMember for &str {
    #[inline]
    fn into_member(self) -> Option<Error> {
        Some(Error::msg(self))
    }
}

impl JoinMember for String {
    #[inline]
    fn into_member(self) -> Option<Error> {
        Some(Error::msg(self))
    }
}

impl JoinMember for Box<dyn StdError + Send + Sync> {
    #[inline]
    fn into_member(self) -> Option<Error> {
        Some(Error::from_boxed(self))
    }
}
