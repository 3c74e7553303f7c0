//! Construction macros for chains.
//!
//! - [`macro@crate::join`] - Mixed-argument join: strings are promoted to
//!   message nodes, `None`s are dropped, and a stack capture is appended when
//!   no member already carries one.
//! - [`macro@crate::wrap`] - Format-wraps an error with a single `{}`
//!   placeholder for the wrapped chain's compact message.
//! - [`macro@crate::values`] - Map-literal construction of a multi-value
//!   annotation node.

/// Joins causes, message fragments, and annotations into one chain.
///
/// Each argument goes through [`JoinMember`](crate::traits::JoinMember):
/// `&str`/`String` become message nodes, `Option::<Error>::None` is dropped,
/// boxed foreign errors are adopted. The surviving members keep their
/// argument order, which is also the walk and rendering order. If none of
/// them carries a stack capture, one taken here is appended as the last
/// member.
///
/// # Examples
///
/// ```
/// use error_weave::{join, Error};
///
/// let err = join!(Error::new("a"), "b", "c");
/// assert_eq!(err.to_string(), "a: b + c");
/// ```
#[macro_export]
macro_rules! join {
    ($($member:expr),+ $(,)?) => {{
        let mut members = ::std::vec::Vec::new();
        $(
            if let ::core::option::Option::Some(member) =
                $crate::traits::JoinMember::into_member($member)
            {
                members.push(member);
            }
        )+
        $crate::Error::join_stacked(members)
    }};
}

/// Format-wraps an error, substituting its compact message for the single
/// `{}` placeholder.
///
/// The wrapped chain is stack-ensured first; unwrapping the result yields the
/// original error. For the common `"context: cause"` shape,
/// [`Error::wrap`](crate::Error::wrap) needs no placeholder at all.
///
/// # Examples
///
/// ```
/// use error_weave::{wrap, Error};
///
/// let base = Error::new("connection refused");
/// let err = wrap!(base, "dialing upstream: {}");
/// assert_eq!(err.to_string(), "dialing upstream: connection refused");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr, $fmt:literal $(,)?) => {{
        let child = $crate::Error::ensure_stack($err);
        let text = ::std::format!($fmt, child);
        $crate::Error::wrapped(text, child)
    }};
}

/// Builds a multi-value annotation node from `key => value` pairs.
///
/// Values may be anything convertible into a JSON value; duplicate keys keep
/// the first binding.
///
/// # Examples
///
/// ```
/// use error_weave::values;
///
/// let err = values! { "host" => "db-01", "retries" => 3 };
/// assert_eq!(err.merged_values()["retries"], 3);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::Error::values(::core::iter::empty::<(&str, $crate::__serde_json::Value)>())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Error::values([
            $(($key, $crate::__serde_json::Value::from($value))),+
        ])
    };
}
