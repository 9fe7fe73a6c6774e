//! Event listener storage
//!
//! Listeners are recorded as opaque callback ids; whoever dispatches the
//! event maps ids back to behavior.

use crate::{DomEventType, NodeId};
use std::collections::HashMap;

/// Node -> event type -> callback ids, in registration order
#[derive(Debug, Default)]
pub struct EventListenerRegistry {
    listeners: HashMap<NodeId, HashMap<DomEventType, Vec<u32>>>,
}

impl EventListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event listener.
    ///
    /// The same callback may be registered more than once and will then run
    /// once per registration.
    pub fn add_listener(&mut self, node: NodeId, event_type: DomEventType, callback_id: u32) {
        self.listeners
            .entry(node)
            .or_default()
            .entry(event_type)
            .or_default()
            .push(callback_id);
    }

    /// Remove the first registration of a callback
    pub fn remove_listener(&mut self, node: NodeId, event_type: DomEventType, callback_id: u32) -> bool {
        let Some(ids) = self.listeners.get_mut(&node).and_then(|n| n.get_mut(&event_type)) else {
            return false;
        };
        match ids.iter().position(|&id| id == callback_id) {
            Some(pos) => {
                ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Get listeners for a node and event type
    pub fn get_listeners(&self, node: NodeId, event_type: DomEventType) -> Vec<u32> {
        self.listeners
            .get(&node)
            .and_then(|n| n.get(&event_type))
            .cloned()
            .unwrap_or_default()
    }

    /// Total registrations across all nodes
    pub fn len(&self) -> usize {
        self.listeners.values().flat_map(|n| n.values()).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all listeners for a node
    pub fn clear_node(&mut self, node: NodeId) {
        self.listeners.remove(&node);
    }
}
