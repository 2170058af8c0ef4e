//! Named display groups and the chainable group builder.
//!
//! A group is an ordered sequence of nodes. Index 0 is the reserved head
//! node: it is never rendered as a body row and carries the callback that
//! `call_group_auto` dispatches on. Rows at index 1.. are the visible body.

use crate::node::{Callback, Node};

/// Name of the reserved sentinel group.
///
/// With no body rows it renders as nothing at all — no title, no border.
pub const EMPTY_GROUP: &str = "EMPTY";

// ============================================================================
// GROUPS
// ============================================================================

/// An ordered sequence of display nodes with a reserved head.
///
/// Invariant: there is always at least one node. The head is created as
/// empty static text and only replaced through [`GroupBuilder::then`].
#[derive(Debug)]
pub struct Group {
    nodes: Vec<Node>,
}

impl Group {
    /// A fresh group: empty-text head, no body rows.
    pub(crate) fn new() -> Self {
        Group {
            nodes: vec![Node::text("")],
        }
    }

    /// The reserved head node.
    pub fn head(&self) -> &Node {
        &self.nodes[0]
    }

    /// The visible body rows (indices 1..).
    pub fn body(&self) -> &[Node] {
        &self.nodes[1..]
    }

    /// Number of visible body rows.
    pub fn body_len(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::new()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Chainable handle onto the most recently activated group.
///
/// Holds a mutable borrow into the engine's store, so chained calls mutate
/// the same nodes the engine renders. Only the group last passed to
/// `Ui::set_group` can be built; re-activating a name resets it to a fresh
/// head with no body rows.
#[derive(Debug)]
pub struct GroupBuilder<'a> {
    group: &'a mut Group,
}

impl<'a> GroupBuilder<'a> {
    pub(crate) fn new(group: &'a mut Group) -> Self {
        GroupBuilder { group }
    }

    /// Append a static-text body row.
    pub fn add(self, text: impl Into<String>) -> Self {
        self.group.nodes.push(Node::text(text));
        self
    }

    /// Append a deferred-computation body row.
    pub fn add_fn(self, cb: Callback) -> Self {
        self.group.nodes.push(Node::callback(cb));
        self
    }

    /// Install `cb` on the head node.
    ///
    /// This wires the group for `call_group_auto` dispatch; body rows are
    /// untouched.
    pub fn then(self, cb: Callback) -> Self {
        self.group.nodes[0].update_callback(cb);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
