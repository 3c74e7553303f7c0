//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_weave::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use error_weave::prelude::*;
//!
//! let err = join!(
//!     Error::new("payment declined"),
//!     Error::value("order_id", 4242),
//! );
//!
//! let info = err.info();
//! assert_eq!(info.error_chain, "payment declined");
//! assert_eq!(info.values["order_id"], 4242);
//! ```

pub use crate::flatten::{flatten, Flattened};
pub use crate::traits::JoinMember;
pub use crate::types::{Error, ErrorInfo, ErrorKind, Frame, Frames};
pub use crate::{join, values, wrap};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::ErrorTraceExt;
