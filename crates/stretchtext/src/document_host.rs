//! [`DomHost`] over the native arena DOM

use crate::{ActivationEvent, Display, DomHost, Listener};
use stretch_dom::{Document, DomEventType, NodeId};

impl From<ActivationEvent> for DomEventType {
    fn from(event: ActivationEvent) -> Self {
        match event {
            ActivationEvent::MouseDown => DomEventType::MouseDown,
            ActivationEvent::TouchStart => DomEventType::TouchStart,
            ActivationEvent::Click => DomEventType::Click,
        }
    }
}

impl DomHost for Document {
    type Handle = NodeId;

    fn elements_with_attribute(&self, name: &str, value: &str) -> Vec<NodeId> {
        Document::elements_with_attribute(self, name, value)
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.get_elements_by_class_name(class)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn next_element_sibling(&self, element: &NodeId) -> Option<NodeId> {
        self.tree().next_element_sibling(*element)
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.tree().tag_name(*element).unwrap_or_default().to_string()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.get_attribute(*element, name).map(str::to_string)
    }

    fn has_attribute(&self, element: &NodeId, name: &str) -> bool {
        Document::has_attribute(self, *element, name)
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        if !Document::set_attribute(self, *element, name, value) {
            tracing::warn!("Cannot set {} on non-element {}", name, element);
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        Document::has_class(self, *element, class)
    }

    fn toggle_class(&mut self, element: &NodeId, class: &str) -> bool {
        Document::toggle_class(self, *element, class)
    }

    fn set_display(&mut self, element: &NodeId, display: Display) {
        self.set_style_property(*element, "display", display.as_str());
    }

    fn add_listener(&mut self, element: &NodeId, event: ActivationEvent, listener: Listener) {
        self.listeners_mut().add_listener(*element, event.into(), listener.callback_id());
    }

    fn describe(&self, element: &NodeId) -> String {
        Document::describe(self, *element)
    }
}
