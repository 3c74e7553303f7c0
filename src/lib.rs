//! Structured error chains: join causes, attach key/value context, capture
//! call stacks, and export the whole chain for logging.
//!
//! A chain is a tree of immutable nodes built bottom-up: wrap, annotate,
//! join, then format or export. One depth-first flatten drives both the
//! renderer and the structured export, so every consumer sees the same node
//! order.
//!
//! # Examples
//!
//! ## Joining causes and context
//!
//! ```
//! use error_weave::{join, Error};
//!
//! let err = join!(
//!     Error::new("config load failed"),
//!     "missing key",
//!     Error::value("path", "/etc/app.toml"),
//! );
//!
//! // Compact form: annotations vanish, causes keep their order.
//! assert_eq!(err.to_string(), "config load failed: missing key");
//!
//! // Verbose form interleaves the stack block and value lines.
//! assert!(err.verbose().contains("stack\n"));
//! assert!(err.verbose().contains("value: path \"/etc/app.toml\""));
//! ```
//!
//! ## Exporting for a log sink
//!
//! ```
//! use error_weave::{join, Error};
//!
//! let err = join!(Error::new("boom"), Error::value("attempt", 3));
//! let info = err.info();
//!
//! assert_eq!(info.error_chain, err.compact());
//! assert!(!info.stack_traces.is_empty());
//! assert_eq!(info.values["attempt"], 3);
//! ```
//!
//! ## Wrapping a cause
//!
//! ```
//! use error_weave::{wrap, Error};
//! use std::error::Error as _;
//!
//! let err = wrap!(Error::new("connection refused"), "dialing upstream: {}");
//! assert_eq!(err.to_string(), "dialing upstream: connection refused");
//! assert!(err.source().is_some());
//! ```

/// Depth-first chain linearization
pub mod flatten;
/// Construction macros for chains
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Seam traits for chain construction
pub mod traits;
/// Chain node types and the export record
pub mod types;

mod render;

/// Tracing integration - structured event emission (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use flatten::{flatten, Flattened};
pub use traits::JoinMember;
pub use types::{Error, ErrorInfo, ErrorKind, Frame, Frames};

#[doc(hidden)]
pub use serde_json as __serde_json;
