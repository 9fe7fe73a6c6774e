//! Stretch DOM - Document Object Model
//!
//! Arena-allocated DOM tree used by the native StretchText page runtime.
//! Nodes are addressed by [`NodeId`]; the document owns every node and
//! hands out ids rather than references.

mod node;
mod tree;
mod document;
mod classlist;
mod style;
mod selector;
mod dom_events;
mod listeners;

pub use node::{Node, NodeData, ElementData, TextData, Attribute};
pub use tree::DomTree;
pub use document::{Document, ReadyState};
pub use classlist::DOMTokenList;
pub use style::InlineStyle;
pub use selector::SimpleSelector;
pub use dom_events::{DomEvent, DomEventType};
pub use listeners::EventListenerRegistry;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
