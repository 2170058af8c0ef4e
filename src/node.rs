//! Display node content model.
//!
//! A node is one line of a display group: fixed text or a deferred
//! computation invoked at render time. The content source is a tagged
//! union, so a node always has exactly one active source.

use std::fmt;

// ============================================================================
// CALLBACKS
// ============================================================================

/// A deferred line computation, in one of three shapes.
///
/// The shape matters on a group's head node: `call_group_auto` dispatches
/// on it. A no-arg callback runs after a plain render, an index-arg
/// callback receives the row chosen interactively, and a string-arg
/// callback receives a prompted value.
pub enum Callback {
    /// Invoked with no input.
    NoArg(Box<dyn Fn() -> String>),
    /// Invoked with a 1-based row index.
    IntArg(Box<dyn Fn(usize) -> String>),
    /// Invoked with a line of user input.
    StringArg(Box<dyn Fn(&str) -> String>),
}

impl Callback {
    /// Wrap a zero-argument closure.
    pub fn no_arg(f: impl Fn() -> String + 'static) -> Self {
        Callback::NoArg(Box::new(f))
    }

    /// Wrap a row-index closure.
    pub fn int_arg(f: impl Fn(usize) -> String + 'static) -> Self {
        Callback::IntArg(Box::new(f))
    }

    /// Wrap a string-input closure.
    pub fn string_arg(f: impl Fn(&str) -> String + 'static) -> Self {
        Callback::StringArg(Box::new(f))
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::NoArg(_) => f.write_str("NoArg(..)"),
            Callback::IntArg(_) => f.write_str("IntArg(..)"),
            Callback::StringArg(_) => f.write_str("StringArg(..)"),
        }
    }
}

// ============================================================================
// NODES
// ============================================================================

/// The active content source of a node.
#[derive(Debug)]
pub enum NodeContent {
    /// Fixed text, shown as-is.
    Text(String),
    /// Deferred computation, resolved at render time.
    Deferred(Callback),
}

/// One line of a display group.
#[derive(Debug)]
pub struct Node {
    content: NodeContent,
}

impl Node {
    /// A static-text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node {
            content: NodeContent::Text(text.into()),
        }
    }

    /// A deferred-computation node.
    pub fn callback(cb: Callback) -> Self {
        Node {
            content: NodeContent::Deferred(cb),
        }
    }

    /// Replace the content with static text.
    pub fn update_text(&mut self, new_text: impl Into<String>) {
        self.content = NodeContent::Text(new_text.into());
    }

    /// Replace the content with a deferred computation.
    pub fn update_callback(&mut self, cb: Callback) {
        self.content = NodeContent::Deferred(cb);
    }

    /// The active content source.
    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    /// Resolve the line to display.
    ///
    /// Deferred computations receive neutral placeholders: 0 for the
    /// index-arg shape, "" for the string-arg shape.
    pub fn get(&self) -> String {
        match &self.content {
            NodeContent::Text(text) => text.clone(),
            NodeContent::Deferred(Callback::NoArg(f)) => f(),
            NodeContent::Deferred(Callback::IntArg(f)) => f(0),
            NodeContent::Deferred(Callback::StringArg(f)) => f(""),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
