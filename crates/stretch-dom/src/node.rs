//! DOM Node
//!
//! Nodes link to their relatives through [`NodeId`]s instead of pointers so
//! the whole tree lives in one arena.

use crate::{DOMTokenList, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(name: &str) -> Self {
        Self::detached(NodeData::Element(ElementData::new(name)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::detached(NodeData::Text(TextData { content: content.to_string() }))
    }

    /// Create a comment node
    pub fn comment(content: &str) -> Self {
        Self::detached(NodeData::Comment(content.to_string()))
    }

    /// Create a DOCTYPE node
    pub fn doctype(name: &str, public_id: &str, system_id: &str) -> Self {
        Self::detached(NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Local tag name, lowercased
    pub name: String,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
}

impl ElementData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check for an attribute, regardless of its value
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            attr.value = value.to_string();
            return;
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(pos).value)
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Parsed `class` attribute
    pub fn class_list(&self) -> DOMTokenList {
        DOMTokenList::from_string(self.get_attr("class").unwrap_or(""))
    }

    /// Replace the `class` attribute with the given token list
    pub fn set_class_list(&mut self, list: &DOMTokenList) {
        self.set_attr("class", &list.value());
    }
}

/// Text node data
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_name_lowercased() {
        let elem = ElementData::new("DIV");
        assert_eq!(elem.name, "div");
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut elem = ElementData::new("a");
        elem.set_attr("href", "#one");
        elem.set_attr("href", "#two");
        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(elem.get_attr("href"), Some("#two"));
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new("span");
        elem.set_attr("title", "Read more");
        assert_eq!(elem.remove_attr("title"), Some("Read more".to_string()));
        assert!(!elem.has_attr("title"));
        assert_eq!(elem.remove_attr("title"), None);
    }

    #[test]
    fn test_class_list_roundtrip() {
        let mut elem = ElementData::new("span");
        elem.set_attr("class", "stretchsummary  note");
        let mut list = elem.class_list();
        list.toggle("stretchtext-open", None);
        elem.set_class_list(&list);
        assert_eq!(elem.get_attr("class"), Some("stretchsummary note stretchtext-open"));
    }
}
