//! [`DomHost`] over the browser DOM

use stretchtext::{ActivationEvent, Display, DomHost, Listener, StretchError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlCollection, HtmlElement};

/// The live document, borrowed for one controller operation
#[derive(Debug, Clone)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn collect(collection: HtmlCollection) -> Vec<Element> {
    (0..collection.length()).filter_map(|i| collection.item(i)).collect()
}

fn warn(message: &str, err: &JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(message), err);
}

impl DomHost for WebHost {
    type Handle = Element;

    fn elements_with_attribute(&self, name: &str, value: &str) -> Vec<Element> {
        // Scanning avoids building a selector from unescaped config strings
        collect(self.document.get_elements_by_tag_name("*"))
            .into_iter()
            .filter(|el| el.get_attribute(name).as_deref() == Some(value))
            .collect()
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        collect(self.document.get_elements_by_class_name(class))
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn next_element_sibling(&self, element: &Element) -> Option<Element> {
        element.next_element_sibling()
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_attribute(&self, element: &Element, name: &str) -> bool {
        element.has_attribute(name)
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) {
        if let Err(err) = element.set_attribute(name, value) {
            warn(&format!("Cannot set {name}"), &err);
        }
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn toggle_class(&mut self, element: &Element, class: &str) -> bool {
        element.class_list().toggle(class).unwrap_or_else(|err| {
            warn(&format!("Cannot toggle class {class}"), &err);
            false
        })
    }

    fn set_display(&mut self, element: &Element, display: Display) {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => {
                if let Err(err) = html.style().set_property("display", display.as_str()) {
                    warn("Cannot set display", &err);
                }
            }
            None => warn("No inline style on", element),
        }
    }

    fn add_listener(&mut self, element: &Element, event: ActivationEvent, listener: Listener) {
        let summary = element.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |evt: Event| match listener {
            Listener::Toggle => {
                evt.prevent_default();
                crate::activate(&summary);
            }
            Listener::SuppressNavigation => evt.prevent_default(),
            Listener::Initialize => crate::initialize(),
        });
        if let Err(err) =
            element.add_event_listener_with_callback(event.as_str(), handler.as_ref().unchecked_ref())
        {
            warn(&format!("Cannot listen for {}", event.as_str()), &err);
        }
        // Listeners live as long as the page
        handler.forget();
    }

    fn describe(&self, element: &Element) -> String {
        let mut out = format!("<{}", element.tag_name().to_ascii_lowercase());
        for name in ["id", "class", "href"] {
            if let Some(value) = element.get_attribute(name) {
                out.push_str(&format!(" {name}=\"{value}\""));
            }
        }
        out.push('>');
        out
    }

    fn report(&self, error: &StretchError) {
        web_sys::console::error_1(&JsValue::from_str(&error.to_string()));
    }
}
