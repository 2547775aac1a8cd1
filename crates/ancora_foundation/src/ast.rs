//! The labeled tree produced by parsing.
//!
//! Every combinator that builds structure produces an [`AstNode`]. Nodes
//! start out tagged [`UNNAMED`] and are named by the parser that built them;
//! AST mutators then reshape the raw tree into whatever a consumer needs.

use std::fmt;

use crate::cursor::Cursor;
use crate::location::Location;

/// Tag carried by nodes whose parser was never given a name.
pub const UNNAMED: &str = "UNNAMED";

/// Scalar payload of an AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeValue {
    /// A single character, produced by character matchers.
    Char(char),
    /// Text, produced by identifiers, literals and operators.
    Str(String),
}

impl NodeValue {
    /// Returns the value as text.
    #[must_use]
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Char(c) => std::borrow::Cow::Owned(c.to_string()),
            Self::Str(s) => std::borrow::Cow::Borrowed(s),
        }
    }

    /// Returns the character if this is a `Char` value.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<char> for NodeValue {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<String> for NodeValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for NodeValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// A node of the parse tree.
///
/// Children are kept in grammar order, left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstNode {
    /// Type tag of this node.
    pub node_type: String,
    /// Optional scalar payload.
    pub value: Option<NodeValue>,
    /// Cursor at the start of the text this node covers.
    pub location: Cursor,
    /// Child nodes in source order.
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Creates a childless node with no value.
    #[must_use]
    pub fn new(node_type: impl Into<String>, location: Cursor) -> Self {
        Self {
            node_type: node_type.into(),
            value: None,
            location,
            children: Vec::new(),
        }
    }

    /// Creates an unnamed, childless node.
    #[must_use]
    pub fn empty(location: Cursor) -> Self {
        Self::new(UNNAMED, location)
    }

    /// Sets the value of this node.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<NodeValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the type tag of this node.
    #[must_use]
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: AstNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces all children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<AstNode>) -> Self {
        self.children = children;
        self
    }

    /// Returns true if this node still carries the default tag.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.node_type == UNNAMED
    }

    /// Returns the child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&AstNode> {
        self.children.get(index)
    }

    /// Returns the value as text, if any.
    #[must_use]
    pub fn value_text(&self) -> Option<std::borrow::Cow<'_, str>> {
        self.value.as_ref().map(NodeValue::as_text)
    }

    /// Returns the first value found in a pre-order walk of this subtree.
    #[must_use]
    pub fn first_value(&self) -> Option<&NodeValue> {
        self.value
            .as_ref()
            .or_else(|| self.children.iter().find_map(AstNode::first_value))
    }

    /// Returns the first node tagged `node_type` in a pre-order walk.
    #[must_use]
    pub fn find(&self, node_type: &str) -> Option<&AstNode> {
        if self.node_type == node_type {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(node_type))
    }

    /// Returns the source position of this node.
    #[must_use]
    pub fn position(&self) -> Location {
        self.location.location()
    }

    /// Counts the nodes in this subtree, including itself.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(AstNode::size).sum::<usize>()
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.node_type)?;
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
