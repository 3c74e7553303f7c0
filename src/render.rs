//! Compact and verbose chain rendering.
//!
//! Both render modes walk a node's own declared children rather than the
//! global flatten, which keeps the output associative under nested joins.
//! Separator punctuation (`": "`, `" + "`, newline) is a compatibility
//! contract: downstream log parsing matches on it.
//!
//! String assembly goes through a thread-local buffer pool. A pooled buffer
//! is held exclusively for the duration of one render step and returned on
//! every exit path by its drop guard; the pool is an allocation optimization
//! with no observable effect on output.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::types::error::{Error, Node};

const POOL_LIMIT: usize = 8;

thread_local! {
    static POOL: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Pooled string buffer; returns itself to the pool when dropped.
struct Buf {
    inner: String,
}

fn acquire() -> Buf {
    let inner = POOL.with(|pool| pool.borrow_mut().pop()).unwrap_or_default();
    Buf { inner }
}

impl Buf {
    /// Takes the built string out, bypassing the pool return.
    fn detach(mut self) -> String {
        let inner = mem::take(&mut self.inner);
        mem::forget(self);
        inner
    }
}

impl Deref for Buf {
    type Target = String;

    fn deref(&self) -> &String {
        &self.inner
    }
}

impl DerefMut for Buf {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.inner
    }
}

impl Drop for Buf {
    fn drop(&mut self) {
        let mut inner = mem::take(&mut self.inner);
        inner.clear();
        POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < POOL_LIMIT {
                pool.push(inner);
            }
        });
    }
}

/// Compact one-line rendering.
///
/// Message and wrap nodes contribute their text, a stack node defers to its
/// child, and annotation nodes contribute nothing at all: empty contributions
/// are skipped entirely so they never introduce stray separators.
pub(crate) fn compact(err: &Error) -> String {
    let mut out = acquire();
    write_compact(err, &mut out);
    out.detach()
}

/// Verbose multi-line rendering with stack frames and value annotations.
pub(crate) fn verbose(err: &Error) -> String {
    let mut out = acquire();
    write_verbose(err, &mut out);
    out.detach()
}

/// Compact rendering wrapped in escaped double quotes.
pub(crate) fn quoted(err: &Error) -> String {
    format!("{:?}", compact(err))
}

fn write_compact(err: &Error, out: &mut String) {
    match &err.node {
        Node::Message { text } | Node::Wrap { text, .. } => out.push_str(text),
        Node::Stack { child: Some(child), .. } => write_compact(child, out),
        Node::Stack { child: None, .. } | Node::Value { .. } | Node::MultiValue { .. } => {}
        Node::Foreign { inner } => {
            let _ = write!(out, "{inner}");
        }
        Node::Join { members } => {
            let mut scratch = acquire();
            let mut joined = 0usize;
            for member in members {
                scratch.clear();
                write_compact(member, &mut scratch);
                if scratch.is_empty() {
                    continue;
                }
                match joined {
                    0 => {}
                    1 => out.push_str(": "),
                    _ => out.push_str(" + "),
                }
                out.push_str(&scratch);
                joined += 1;
            }
        }
    }
}

fn write_verbose(err: &Error, out: &mut String) {
    match &err.node {
        Node::Message { text } | Node::Wrap { text, .. } => out.push_str(text),
        Node::Stack { child, frames } => {
            if let Some(child) = child {
                let mut scratch = acquire();
                write_verbose(child, &mut scratch);
                if !scratch.is_empty() {
                    out.push_str(&scratch);
                    out.push('\n');
                }
            }
            out.push_str("stack\n");
            for frame in frames.resolve() {
                out.push('\t');
                let _ = write!(out, "{frame}");
                out.push('\n');
            }
        }
        Node::Value { key, value } => {
            out.push_str("value: ");
            out.push_str(key);
            out.push_str(" \"");
            write_value(value, out);
            out.push('"');
        }
        Node::MultiValue { values } => {
            out.push_str("values: [");
            let mut first = true;
            for (key, value) in values {
                if !first {
                    out.push(' ');
                }
                out.push_str(key);
                out.push_str(": \"");
                write_value(value, out);
                out.push('"');
                first = false;
            }
            out.push(']');
        }
        Node::Foreign { inner } => {
            let _ = write!(out, "{inner}");
        }
        Node::Join { members } => {
            let mut scratch = acquire();
            let mut joined = 0usize;
            for member in members {
                scratch.clear();
                write_verbose(member, &mut scratch);
                if scratch.is_empty() {
                    continue;
                }
                match joined {
                    0 => {}
                    1 => out.push_str(": "),
                    _ => out.push('\n'),
                }
                if joined > 0 {
                    out.push('\t');
                }
                out.push_str(&scratch);
                joined += 1;
            }
        }
    }
}

/// Renders an annotation value the way a log line expects it: strings bare,
/// everything else in its JSON form.
fn write_value(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::String(text) => out.push_str(text),
        other => {
            let _ = write!(out, "{other}");
        }
    }
}
