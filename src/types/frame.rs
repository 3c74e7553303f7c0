//! Call-stack capture with deferred symbolization.
//!
//! Capture records raw [`backtrace::Frame`]s only, which is cheap enough to do
//! on every constructed error. Mapping a frame to `function file:line` is
//! comparatively costly, so it is deferred to [`Frames::resolve`] and only
//! happens when a chain is actually rendered or exported. Resolution is
//! idempotent, so concurrent readers may resolve the same capture redundantly
//! without coordination.

use core::fmt;

use serde::Serialize;

/// Ceiling on captured frames; deeper stacks are truncated, never an error.
pub(crate) const MAX_FRAMES: usize = 32;

/// A single resolved stack frame.
///
/// Produced by [`Frames::resolve`]. `Display` renders the stable
/// `function file:line` form consumed by log sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.function, self.file, self.line)
    }
}

/// An owned snapshot of raw program counters, captured at construction time.
#[derive(Clone)]
pub struct Frames {
    raw: Vec<backtrace::Frame>,
}

impl Frames {
    /// Number of captured raw frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// `true` when nothing was captured.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Symbolizes the captured frames.
    ///
    /// The leading frames of every capture belong to the trace machinery and
    /// this crate's constructors, never the caller; they are recognized by
    /// symbol name and dropped here, so the first resolved frame is the
    /// direct caller of the capturing constructor. Frames that cannot be
    /// resolved (stripped binaries, foreign code) keep `???` placeholders
    /// and line `0` instead of being dropped, so the remaining frame count
    /// stays faithful to the capture.
    pub fn resolve(&self) -> Vec<Frame> {
        let mut resolved = Vec::with_capacity(self.raw.len());
        for raw in &self.raw {
            let mut frame: Option<Frame> = None;
            backtrace::resolve_frame(raw, |symbol| {
                // The callback fires once per inlined symbol; keep the first.
                if frame.is_some() {
                    return;
                }
                frame = Some(Frame {
                    function: symbol
                        .name()
                        .map(|name| name.to_string())
                        .unwrap_or_else(|| "???".into()),
                    file: symbol
                        .filename()
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| "???".into()),
                    line: symbol.lineno().unwrap_or(0),
                });
            });
            resolved.push(frame.unwrap_or_else(|| Frame {
                function: "???".into(),
                file: "???".into(),
                line: 0,
            }));
        }

        let internal = resolved
            .iter()
            .take_while(|frame| is_internal(&frame.function))
            .count();
        resolved.drain(..internal);
        resolved
    }
}

/// Capture-machinery frames, identified symbolically rather than by a fixed
/// count: skip arithmetic breaks as soon as inlining or the trace
/// implementation changes the frame layout.
fn is_internal(function: &str) -> bool {
    function.starts_with("backtrace::") || function.starts_with("error_weave::")
}

impl fmt::Debug for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frames").field("len", &self.raw.len()).finish()
    }
}

/// Captures the current call stack, raw and unfiltered; crate-internal
/// frames are recognized and dropped during [`Frames::resolve`], where the
/// symbols are available anyway.
#[inline(never)]
pub(crate) fn capture() -> Frames {
    let mut raw = Vec::with_capacity(MAX_FRAMES);
    backtrace::trace(|frame| {
        raw.push(frame.clone());
        raw.len() < MAX_FRAMES
    });
    Frames { raw }
}
