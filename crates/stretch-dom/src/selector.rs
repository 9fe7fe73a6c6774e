//! Simple selectors
//!
//! Single compound-free selectors: `tag`, `.class`, `#id`, `[attr]`,
//! `[attr="value"]` and `*`. Combinators are not supported.

use crate::ElementData;

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Attribute { name: String, value: Option<String> },
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            Self::parse_attribute(inner)
        } else if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            Some(Self::Tag(s.to_ascii_lowercase()))
        } else {
            None
        }
    }

    fn parse_attribute(inner: &str) -> Option<Self> {
        let (name, value) = match inner.split_once('=') {
            Some((name, raw)) => {
                let raw = raw.trim();
                let unquoted = raw
                    .strip_prefix('"').and_then(|r| r.strip_suffix('"'))
                    .or_else(|| raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')))
                    .unwrap_or(raw);
                (name.trim(), Some(unquoted.to_string()))
            }
            None => (inner.trim(), None),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self::Attribute { name: name.to_ascii_lowercase(), value })
    }

    /// Check an element against this selector
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.name.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.class_list().contains(class),
            Self::Attribute { name, value: None } => elem.has_attr(name),
            Self::Attribute { name, value: Some(value) } => {
                elem.get_attr(name) == Some(value.as_str())
            }
        }
    }
}
