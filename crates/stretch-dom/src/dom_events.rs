//! DOM Events
//!
//! Document lifecycle and pointer events dispatched by the page runtime.

use crate::NodeId;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEventType {
    // Document lifecycle
    DOMContentLoaded,
    Load,
    ReadyStateChange,

    // Pointer input
    MouseDown,
    TouchStart,
    Click,
}

impl DomEventType {
    /// Event name as used by `addEventListener`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DOMContentLoaded => "DOMContentLoaded",
            Self::Load => "load",
            Self::ReadyStateChange => "readystatechange",
            Self::MouseDown => "mousedown",
            Self::TouchStart => "touchstart",
            Self::Click => "click",
        }
    }

    /// Parse an event name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "DOMContentLoaded" => Self::DOMContentLoaded,
            "load" => Self::Load,
            "readystatechange" => Self::ReadyStateChange,
            "mousedown" => Self::MouseDown,
            "touchstart" => Self::TouchStart,
            "click" => Self::Click,
            _ => return None,
        })
    }

    /// Whether events of this type bubble to ancestors
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::Load | Self::ReadyStateChange)
    }

    /// Whether listeners may cancel the default action
    pub fn cancelable(self) -> bool {
        matches!(self, Self::MouseDown | Self::TouchStart | Self::Click)
    }
}

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: DomEventType,
    pub target: NodeId,
    pub current_target: Option<NodeId>,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    /// Create an event with the type's default bubbling and cancelability
    pub fn new(event_type: DomEventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: None,
            bubbles: event_type.bubbles(),
            cancelable: event_type.cancelable(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create DOMContentLoaded event
    pub fn content_loaded() -> Self {
        Self::new(DomEventType::DOMContentLoaded, NodeId::ROOT)
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Check if propagation was stopped
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
