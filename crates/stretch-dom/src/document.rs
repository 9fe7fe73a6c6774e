//! Document - High-level document API

use crate::{
    DOMTokenList, DomTree, ElementData, EventListenerRegistry, InlineStyle, NodeData, NodeId,
    SimpleSelector,
};

/// Document loading state (`document.readyState`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ReadyState {
    /// Still parsing
    #[default]
    Loading,
    /// Parsed, subresources pending
    Interactive,
    /// Fully loaded
    Complete,
}

impl ReadyState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Interactive => "interactive",
            Self::Complete => "complete",
        }
    }
}

/// HTML Document
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    ready_state: ReadyState,
    listeners: EventListenerRegistry,
}

impl Document {
    /// Create a new empty document with html/head/body
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            ready_state: ReadyState::Loading,
            listeners: EventListenerRegistry::new(),
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            ready_state: ReadyState::Loading,
            listeners: EventListenerRegistry::new(),
        }
    }

    /// Locate <html>, <head> and <body> after the tree has been built
    pub fn finalize(&mut self) {
        let find = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.children(parent)
                .find(|(_, node)| node.as_element().is_some_and(|e| e.name == tag))
                .map_or(NodeId::NONE, |(id, _)| id)
        };
        self.html_element = find(&self.tree, self.tree.root(), "html");
        self.head_element = find(&self.tree, self.html_element, "head");
        self.body_element = find(&self.tree, self.html_element, "body");
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get document title
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        self.tree.children(self.head_element)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.name == "title"))
            .map(|(id, _)| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        if state != self.ready_state {
            tracing::debug!("Document {} ready state: {}", self.url, state.as_str());
            self.ready_state = state;
        }
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn listeners(&self) -> &EventListenerRegistry {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut EventListenerRegistry {
        &mut self.listeners
    }

    // === Element access ===

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.get(id)?.as_element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.get_mut(id)?.as_element_mut()
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id);
        id
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.tree.create_text(text);
        self.tree.append_child(parent, id);
        id
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute. Returns false if `id` is not an element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        match self.element_mut(id) {
            Some(elem) => {
                elem.set_attr(name, value);
                true
            }
            None => false,
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id)?.remove_attr(name)
    }

    // === classList ===

    pub fn class_list(&self, id: NodeId) -> DOMTokenList {
        self.element(id).map(ElementData::class_list).unwrap_or_default()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.class_list(id).contains(class)
    }

    /// `classList.toggle(class)`. Returns whether the class is now present;
    /// always false for non-elements.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(elem) = self.element_mut(id) else {
            return false;
        };
        let mut list = elem.class_list();
        let present = list.toggle(class, None);
        elem.set_class_list(&list);
        present
    }

    // === Inline style ===

    pub fn style(&self, id: NodeId) -> InlineStyle {
        self.get_attribute(id, "style")
            .map(InlineStyle::parse)
            .unwrap_or_default()
    }

    pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
        self.style(id).get(property).map(str::to_string)
    }

    /// `element.style[property] = value`
    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) -> bool {
        let mut style = self.style(id);
        style.set(property, value);
        self.set_attribute(id, "style", &style.to_attr())
    }

    // === Queries ===

    /// Get element by ID (first match in document order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_selector(&SimpleSelector::Id(id.to_string()))
    }

    /// Get elements by class name, in document order
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.query_selector_all(&SimpleSelector::Class(class.to_string()))
    }

    /// Elements whose attribute `name` equals `value`, in document order
    pub fn elements_with_attribute(&self, name: &str, value: &str) -> Vec<NodeId> {
        self.query_selector_all(&SimpleSelector::Attribute {
            name: name.to_string(),
            value: Some(value.to_string()),
        })
    }

    /// All elements matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &SimpleSelector) -> Vec<NodeId> {
        self.tree.descendants(self.tree.root())
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
            .collect()
    }

    /// First element matching `selector`
    pub fn query_selector(&self, selector: &SimpleSelector) -> Option<NodeId> {
        self.tree.descendants(self.tree.root())
            .into_iter()
            .find(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
    }

    /// Short human-readable form of a node, e.g. `<span class="stretchsummary">`
    pub fn describe(&self, id: NodeId) -> String {
        let Some(node) = self.tree.get(id) else {
            return format!("<missing node {id}>");
        };
        match &node.data {
            NodeData::Element(elem) => {
                let mut out = format!("<{}", elem.name);
                for attr in elem.attrs.iter().filter(|a| matches!(a.name.as_str(), "id" | "class" | "href")) {
                    out.push_str(&format!(" {}=\"{}\"", attr.name, attr.value));
                }
                out.push('>');
                out
            }
            NodeData::Text(text) => format!("#text {:?}", text.content),
            NodeData::Comment(_) => "#comment".to_string(),
            NodeData::Doctype { .. } => "#doctype".to_string(),
            NodeData::Document => "#document".to_string(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new("test://doc");
        let body = doc.body();
        let summary = doc.append_element(body, "span");
        doc.set_attribute(summary, "class", "stretchsummary");
        doc.append_text(summary, "more");
        let detail = doc.append_element(body, "span");
        doc.set_attribute(detail, "id", "d1");
        (doc, summary, detail)
    }

    #[test]
    fn test_new_document_structure() {
        let doc = Document::new("about:blank");
        assert!(doc.document_element().is_valid());
        assert_eq!(doc.tree().tag_name(doc.head()), Some("head"));
        assert_eq!(doc.tree().tag_name(doc.body()), Some("body"));
        assert_eq!(doc.ready_state(), ReadyState::Loading);
    }

    #[test]
    fn test_title() {
        let mut doc = Document::new("about:blank");
        let title = doc.append_element(doc.head(), "title");
        doc.append_text(title, "  Stretch  ");
        assert_eq!(doc.title(), "Stretch");
    }

    #[test]
    fn test_get_element_by_id() {
        let (doc, _, detail) = sample();
        assert_eq!(doc.get_element_by_id("d1"), Some(detail));
        assert_eq!(doc.get_element_by_id("nope"), None);
    }

    #[test]
    fn test_toggle_class() {
        let (mut doc, summary, _) = sample();
        assert!(doc.toggle_class(summary, "stretchtext-open"));
        assert_eq!(doc.get_attribute(summary, "class"), Some("stretchsummary stretchtext-open"));
        assert!(!doc.toggle_class(summary, "stretchtext-open"));
        assert!(!doc.has_class(summary, "stretchtext-open"));
    }

    #[test]
    fn test_toggle_class_on_text_node() {
        let mut doc = Document::new("about:blank");
        let text = doc.append_text(doc.body(), "x");
        assert!(!doc.toggle_class(text, "a"));
    }

    #[test]
    fn test_style_property() {
        let (mut doc, _, detail) = sample();
        assert_eq!(doc.style_property(detail, "display"), None);
        doc.set_style_property(detail, "display", "inline");
        assert_eq!(doc.style_property(detail, "display").as_deref(), Some("inline"));
        doc.set_style_property(detail, "display", "none");
        assert_eq!(doc.get_attribute(detail, "style"), Some("display: none;"));
    }

    #[test]
    fn test_describe() {
        let (doc, summary, _) = sample();
        assert_eq!(doc.describe(summary), r#"<span class="stretchsummary">"#);
        assert_eq!(doc.describe(NodeId::ROOT), "#document");
    }

    #[test]
    fn test_finalize_locates_structure() {
        let mut doc = Document::empty("about:blank");
        let root = doc.tree().root();
        let html = doc.append_element(root, "html");
        let head = doc.append_element(html, "head");
        let body = doc.append_element(html, "body");
        doc.finalize();
        assert_eq!(doc.document_element(), html);
        assert_eq!(doc.head(), head);
        assert_eq!(doc.body(), body);
    }
}
