//! Depth-first chain linearization.
//!
//! The flatten engine is the shared substrate under value merging and the
//! structured export: it expands every node through either its single child
//! (stack and wrap nodes) or its full member list (join nodes) into one
//! ordered, pre-order sequence.
//!
//! Chains are trees by construction, so every node is visited exactly once
//! and no visited-set is kept; a cycle would be a construction bug and is not
//! papered over here.

use smallvec::SmallVec;

use crate::types::error::{Error, Node};

/// Borrowed flatten result; inline capacity covers typical chains.
pub type Flattened<'a> = SmallVec<[&'a Error; 8]>;

/// Linearizes a chain into construction order for flat joins and depth-first
/// order for nested ones.
///
/// # Examples
///
/// ```
/// use error_weave::{flatten, Error, ErrorKind};
///
/// let err = Error::join([Error::msg("a"), Error::msg("b")]);
/// let kinds: Vec<_> = flatten(&err).iter().map(|node| node.kind()).collect();
/// assert_eq!(kinds, [ErrorKind::Join, ErrorKind::Message, ErrorKind::Message]);
/// ```
pub fn flatten(err: &Error) -> Flattened<'_> {
    let mut out = Flattened::new();
    visit(err, &mut out);
    out
}

fn visit<'a>(err: &'a Error, out: &mut Flattened<'a>) {
    out.push(err);
    match &err.node {
        Node::Stack { child: Some(child), .. } => visit(child, out),
        Node::Wrap { child, .. } => visit(child, out),
        Node::Join { members } => {
            for member in members {
                visit(member, out);
            }
        }
        _ => {}
    }
}
