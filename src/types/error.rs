//! The chain node model and construction primitives.
//!
//! An [`Error`] is the root of a tree of nodes: plain messages, stack
//! captures, key/value annotations, joins over an ordered member list, format
//! wrappers, and adopted foreign errors. Nodes are immutable once built;
//! chains are assembled bottom-up by nesting constructors and are shared
//! freely across threads for reading.
//!
//! # Examples
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
//! assert_eq!(err.to_string(), "config load failed: missing key");
//! assert_eq!(err.merged_values()["path"], "/etc/app.toml");
//! ```

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

use crate::flatten::{flatten, Flattened};
use crate::render;
use crate::types::frame::{capture, Frames};

/// Discriminant of a chain node, used to inspect a node without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Terminal text message.
    Message,
    /// Stack capture wrapping at most one child.
    Stack,
    /// Single key/value annotation.
    Value,
    /// Multiple key/value annotations.
    MultiValue,
    /// Ordered aggregation of member errors.
    Join,
    /// Format wrapper around a single cause.
    Wrap,
    /// Adopted error from another crate.
    Foreign,
}

/// Closed node variants; flatten and rendering are matches over this tag.
#[derive(Debug)]
pub(crate) enum Node {
    Message {
        text: String,
    },
    Stack {
        /// `None` only for the capture appended by [`Error::join_stacked`].
        child: Option<Box<Error>>,
        frames: Frames,
    },
    Value {
        key: String,
        value: serde_json::Value,
    },
    MultiValue {
        values: BTreeMap<String, serde_json::Value>,
    },
    Join {
        members: Vec<Error>,
    },
    Wrap {
        /// Fully formatted message; the child is already substituted in.
        text: String,
        child: Box<Error>,
    },
    Foreign {
        inner: Box<dyn StdError + Send + Sync>,
    },
}

/// A composite error chain.
///
/// `Display` renders the compact one-line form; the alternate flag (`{:#}`)
/// renders the verbose multi-line form with stack frames and value
/// annotations interleaved in chain order.
#[must_use]
#[derive(Debug)]
pub struct Error {
    pub(crate) node: Node,
}

impl Error {
    /// Creates a message error and unconditionally captures the caller's
    /// stack.
    ///
    /// Every error built through this constructor carries exactly one stack
    /// capture; later [`ensure_stack`](Error::ensure_stack) calls on the
    /// chain are suppressed. Crate-internal frames are filtered out when the
    /// capture is resolved, so the first rendered frame is the direct
    /// caller.
    pub fn new(text: impl Into<String>) -> Self {
        Error {
            node: Node::Stack { child: Some(Box::new(Self::msg(text))), frames: capture() },
        }
    }

    /// Creates a bare message node without capturing a stack.
    ///
    /// This is the promotion applied to string arguments of [`join!`](crate::join).
    #[inline]
    pub fn msg(text: impl Into<String>) -> Self {
        Error { node: Node::Message { text: text.into() } }
    }

    /// Creates a single key/value annotation node.
    ///
    /// Values are metadata, not root causes, so no stack is captured and the
    /// compact rendering of the node is empty.
    #[inline]
    pub fn value(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Error { node: Node::Value { key: key.into(), value: value.into() } }
    }

    /// Creates a multi-value annotation node from key/value pairs.
    ///
    /// Duplicate keys within the input keep the first binding, consistent
    /// with the chain-wide first-occurrence-wins merge.
    pub fn values<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut values = BTreeMap::new();
        for (key, value) in entries {
            values.entry(key.into()).or_insert_with(|| value.into());
        }
        Error { node: Node::MultiValue { values } }
    }

    /// Joins an ordered list of member errors into one aggregate node.
    ///
    /// The member order is stored verbatim and defines both the chain-walk
    /// order and the rendering order. See [`join!`](crate::join) for the
    /// mixed-argument form that promotes strings and drops `None`s.
    pub fn join(members: impl IntoIterator<Item = Error>) -> Self {
        Error { node: Node::Join { members: members.into_iter().collect() } }
    }

    /// Joins members and guarantees the resulting chain carries a stack.
    ///
    /// If no member (recursively) already holds a capture, one taken at the
    /// call site is appended as the last member. The appended node has no
    /// child and contributes nothing to the compact rendering.
    pub fn join_stacked(members: impl IntoIterator<Item = Error>) -> Self {
        let mut members: Vec<Error> = members.into_iter().collect();
        if !members.iter().any(Error::has_stack) {
            members.push(Error { node: Node::Stack { child: None, frames: capture() } });
        }
        Error { node: Node::Join { members } }
    }

    /// Wraps `err` with a context message, standard cause-unwrap semantics.
    ///
    /// The wrapped chain is stack-ensured first, then the message is rendered
    /// eagerly as `"context: <compact of err>"`. Unwrapping the result yields
    /// the original error, not a join. Use [`wrap!`](crate::wrap) to control
    /// the placeholder position.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_weave::Error;
    ///
    /// let base = Error::new("connection refused");
    /// let err = Error::wrap(base, "dialing upstream");
    /// assert_eq!(err.to_string(), "dialing upstream: connection refused");
    /// ```
    pub fn wrap(err: Error, context: impl fmt::Display) -> Self {
        let child = Self::ensure_stack(err);
        let text = format!("{context}: {child}");
        Error { node: Node::Wrap { text, child: Box::new(child) } }
    }

    /// Builds a wrap node from an already formatted message.
    ///
    /// `text` must embed the child's rendering; this is the primitive behind
    /// the [`wrap!`](crate::wrap) macro and rarely called directly.
    #[inline]
    pub fn wrapped(text: impl Into<String>, child: Error) -> Self {
        Error { node: Node::Wrap { text: text.into(), child: Box::new(child) } }
    }

    /// Adopts an error from another crate as a leaf node.
    pub fn foreign<E>(inner: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error { node: Node::Foreign { inner: Box::new(inner) } }
    }

    /// Adopts an already boxed error as a leaf node.
    #[inline]
    pub fn from_boxed(inner: Box<dyn StdError + Send + Sync>) -> Self {
        Error { node: Node::Foreign { inner } }
    }

    /// Attaches a stack capture unless the chain already carries one.
    pub fn ensure_stack(err: Error) -> Self {
        if err.has_stack() {
            err
        } else {
            Error { node: Node::Stack { child: Some(Box::new(err)), frames: capture() } }
        }
    }

    /// Returns the node's kind tag.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self.node {
            Node::Message { .. } => ErrorKind::Message,
            Node::Stack { .. } => ErrorKind::Stack,
            Node::Value { .. } => ErrorKind::Value,
            Node::MultiValue { .. } => ErrorKind::MultiValue,
            Node::Join { .. } => ErrorKind::Join,
            Node::Wrap { .. } => ErrorKind::Wrap,
            Node::Foreign { .. } => ErrorKind::Foreign,
        }
    }

    /// `true` when this node itself is a stack capture.
    #[inline]
    pub fn is_stack(&self) -> bool {
        matches!(self.node, Node::Stack { .. })
    }

    /// `true` when any node in the chain is a stack capture.
    pub fn has_stack(&self) -> bool {
        match &self.node {
            Node::Stack { .. } => true,
            Node::Wrap { child, .. } => child.has_stack(),
            Node::Join { members } => members.iter().any(Error::has_stack),
            _ => false,
        }
    }

    /// Raw frames of this node, if it is a stack capture.
    ///
    /// For the first capture anywhere in a chain, resolved, use
    /// [`stack_frames`](Error::stack_frames).
    #[inline]
    pub fn frames(&self) -> Option<&Frames> {
        match &self.node {
            Node::Stack { frames, .. } => Some(frames),
            _ => None,
        }
    }

    /// Member list of this node, if it is a join.
    #[inline]
    pub fn members(&self) -> Option<&[Error]> {
        match &self.node {
            Node::Join { members } => Some(members),
            _ => None,
        }
    }

    /// Key and value of this node, if it is a single-value annotation.
    #[inline]
    pub fn value_entry(&self) -> Option<(&str, &serde_json::Value)> {
        match &self.node {
            Node::Value { key, value } => Some((key, value)),
            _ => None,
        }
    }

    /// Value map of this node, if it is a multi-value annotation.
    #[inline]
    pub fn value_map(&self) -> Option<&BTreeMap<String, serde_json::Value>> {
        match &self.node {
            Node::MultiValue { values } => Some(values),
            _ => None,
        }
    }

    /// Text of this node, if it is a message or wrap node.
    #[inline]
    pub fn message_text(&self) -> Option<&str> {
        match &self.node {
            Node::Message { text } | Node::Wrap { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Depth-first, pre-order linearization of the chain.
    ///
    /// Visits every node exactly once: a single-child node is followed by its
    /// child, a join by each member in order. This is the canonical walk
    /// shared by rendering-independent export and value merging.
    #[inline]
    pub fn flatten(&self) -> Flattened<'_> {
        flatten(self)
    }

    /// Compact one-line rendering, identical to `Display`.
    #[must_use]
    pub fn compact(&self) -> String {
        render::compact(self)
    }

    /// Verbose multi-line rendering with stack frames and annotations.
    #[must_use]
    pub fn verbose(&self) -> String {
        render::verbose(self)
    }

    /// Compact rendering wrapped in escaped double quotes.
    #[must_use]
    pub fn quoted(&self) -> String {
        render::quoted(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.verbose())
        } else {
            f.write_str(&self.compact())
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.node {
            Node::Stack { child: Some(child), .. } => Some(child.as_ref()),
            Node::Wrap { child, .. } => Some(child.as_ref()),
            // std sources are single-child; expose the first member so
            // generic walkers still reach into the aggregate.
            Node::Join { members } => {
                members.first().map(|member| member as &(dyn StdError + 'static))
            }
            Node::Foreign { inner } => Some(&**inner),
            _ => None,
        }
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Error {
    fn from(inner: Box<dyn StdError + Send + Sync>) -> Self {
        Self::from_boxed(inner)
    }
}
