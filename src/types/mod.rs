//! Chain node types, stack frames, and the export record.
//!
//! # Examples
//!
//! ```
//! use error_weave::{Error, ErrorKind};
//!
//! let err = Error::new("database connection failed");
//! assert_eq!(err.kind(), ErrorKind::Stack);
//! assert_eq!(err.to_string(), "database connection failed");
//! ```

pub mod error;
pub mod error_info;
pub mod frame;

pub use error::{Error, ErrorKind};
pub use error_info::ErrorInfo;
pub use frame::{Frame, Frames};
