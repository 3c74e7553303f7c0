//! Structured export of a chain for logging sinks.
//!
//! [`ErrorInfo`] is the record a structured-logging adapter consumes: the
//! compact message, the first stack capture's resolved frames, and the merged
//! value map. It is derived on every call, never stored, and never mutates
//! the chain it was computed from.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::flatten::flatten;
use crate::types::error::{Error, Node};
use crate::types::frame::Frame;

/// Export record derived from one flatten pass over a chain.
///
/// The serialized field names (`errorChain`, `stackTraces`, `values`) are a
/// contract with downstream log parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    /// Compact rendering of the whole chain.
    pub error_chain: String,
    /// Resolved `function file:line` lines of the first stack capture in
    /// flatten order; empty when the chain carries none.
    pub stack_traces: Vec<String>,
    /// All value annotations merged first-occurrence-wins in flatten order.
    pub values: BTreeMap<String, serde_json::Value>,
}

impl Error {
    /// Exports the chain as an [`ErrorInfo`] record.
    ///
    /// One pass over the flattened chain locates the first stack capture and
    /// merges every value annotation; the message is the compact rendering,
    /// so `info().error_chain` always equals [`compact`](Error::compact).
    #[must_use]
    pub fn info(&self) -> ErrorInfo {
        let mut values = BTreeMap::new();
        let mut first_stack = None;
        for node in flatten(self) {
            merge_node_values(node, &mut values);
            if first_stack.is_none() {
                if let Node::Stack { frames, .. } = &node.node {
                    first_stack = Some(frames);
                }
            }
        }

        let stack_traces = first_stack
            .map(|frames| frames.resolve().iter().map(Frame::to_string).collect())
            .unwrap_or_default();

        ErrorInfo { error_chain: self.compact(), stack_traces, values }
    }

    /// Merges every value annotation in the chain, first occurrence wins.
    ///
    /// A key bound earlier in flatten order suppresses any later duplicate,
    /// regardless of nesting depth. Usable on its own when the full export is
    /// not needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_weave::Error;
    ///
    /// let err = Error::join([Error::value("k", "v1"), Error::value("k", "v2")]);
    /// assert_eq!(err.merged_values()["k"], "v1");
    /// ```
    #[must_use]
    pub fn merged_values(&self) -> BTreeMap<String, serde_json::Value> {
        let mut values = BTreeMap::new();
        for node in flatten(self) {
            merge_node_values(node, &mut values);
        }
        values
    }

    /// Resolved frames of the first stack capture in flatten order.
    ///
    /// Returns `None` when no node in the chain carries a capture.
    #[must_use]
    pub fn stack_frames(&self) -> Option<Vec<Frame>> {
        flatten(self)
            .into_iter()
            .find_map(|node| node.frames())
            .map(crate::types::frame::Frames::resolve)
    }
}

fn merge_node_values(node: &Error, values: &mut BTreeMap<String, serde_json::Value>) {
    match &node.node {
        Node::Value { key, value } => {
            if !values.contains_key(key) {
                values.insert(key.clone(), value.clone());
            }
        }
        Node::MultiValue { values: map } => {
            for (key, value) in map {
                if !values.contains_key(key) {
                    values.insert(key.clone(), value.clone());
                }
            }
        }
        _ => {}
    }
}
