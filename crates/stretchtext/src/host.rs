//! Host document abstraction
//!
//! The controller never owns document elements. It borrows a [`DomHost`]
//! for the duration of each operation and refers to elements through the
//! host's opaque [`DomHost::Handle`].

use crate::StretchError;
use std::fmt;

/// Visual mode applied to a detail element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Inline,
}

impl Display {
    /// CSS `display` value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Inline => "inline",
        }
    }
}

/// Input events the controller listens for on each summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationEvent {
    MouseDown,
    TouchStart,
    Click,
}

impl ActivationEvent {
    pub const ALL: [ActivationEvent; 3] = [Self::MouseDown, Self::TouchStart, Self::Click];

    /// Event name as used by `addEventListener`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::TouchStart => "touchstart",
            Self::Click => "click",
        }
    }

    /// Behavior bound to this event on a summary.
    ///
    /// Presses toggle so text selection can be cancelled on rapid presses;
    /// link navigation can only be cancelled from `click`.
    pub fn listener(self) -> Listener {
        match self {
            Self::MouseDown | Self::TouchStart => Listener::Toggle,
            Self::Click => Listener::SuppressNavigation,
        }
    }
}

/// Behavior attached to an element or the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Cancel the default action and toggle the summary
    Toggle,
    /// Cancel the default action only
    SuppressNavigation,
    /// Run controller initialization (document readiness)
    Initialize,
}

impl Listener {
    /// Stable id for hosts that store listeners as plain integers
    pub fn callback_id(self) -> u32 {
        match self {
            Self::Toggle => 1,
            Self::SuppressNavigation => 2,
            Self::Initialize => 3,
        }
    }

    pub fn from_callback_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::Toggle),
            2 => Some(Self::SuppressNavigation),
            3 => Some(Self::Initialize),
            _ => None,
        }
    }
}

/// Document operations the controller needs from its environment
pub trait DomHost {
    /// Opaque element reference. Equality is element identity.
    type Handle: Clone + PartialEq + fmt::Debug;

    /// Elements whose attribute `name` equals `value`, in document order
    fn elements_with_attribute(&self, name: &str, value: &str) -> Vec<Self::Handle>;

    /// Elements carrying class `class`, in document order
    fn elements_with_class(&self, class: &str) -> Vec<Self::Handle>;

    /// First element in the document with the given id
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    fn next_element_sibling(&self, element: &Self::Handle) -> Option<Self::Handle>;

    /// Tag name in whatever case the host reports
    fn tag_name(&self, element: &Self::Handle) -> String;

    fn attribute(&self, element: &Self::Handle, name: &str) -> Option<String>;

    fn has_attribute(&self, element: &Self::Handle, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    fn set_attribute(&mut self, element: &Self::Handle, name: &str, value: &str);

    fn has_class(&self, element: &Self::Handle, class: &str) -> bool;

    /// Toggle a class, returning whether it is now present
    fn toggle_class(&mut self, element: &Self::Handle, class: &str) -> bool;

    fn set_display(&mut self, element: &Self::Handle, display: Display);

    /// Attach `listener` to `element` for `event`. Attaching twice runs the
    /// behavior twice.
    fn add_listener(&mut self, element: &Self::Handle, event: ActivationEvent, listener: Listener);

    /// Short description of an element for diagnostics
    fn describe(&self, element: &Self::Handle) -> String;

    /// Diagnostic channel for non-fatal errors
    fn report(&self, error: &StretchError) {
        tracing::error!("{}", error);
    }
}
