//! Inline style declarations
//!
//! Minimal `style` attribute model: ordered `property: value` pairs.
//! Only what the page runtime needs (display toggling) is supported;
//! no shorthand expansion or `!important` handling.

/// Parsed `style` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value. Malformed declarations are skipped.
    pub fn parse(text: &str) -> Self {
        let mut style = Self::new();
        for decl in text.split(';') {
            let Some((prop, value)) = decl.split_once(':') else {
                continue;
            };
            let prop = prop.trim();
            let value = value.trim();
            if !prop.is_empty() && !value.is_empty() {
                style.set(prop, value);
            }
        }
        style
    }

    /// Get a property value
    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations.iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, keeping its original position when it already exists
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    /// Remove a property
    pub fn remove(&mut self, property: &str) {
        let property = property.to_ascii_lowercase();
        self.declarations.retain(|(p, _)| *p != property);
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize back to attribute form
    pub fn to_attr(&self) -> String {
        self.declarations.iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let style = InlineStyle::parse("color: red; DISPLAY:none ;");
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("display"), Some("none"));
    }

    #[test]
    fn test_parse_skips_garbage() {
        let style = InlineStyle::parse("nonsense; :empty; width:");
        assert!(style.is_empty());
    }

    #[test]
    fn test_set_keeps_order() {
        let mut style = InlineStyle::parse("display: none; color: red");
        style.set("display", "inline");
        assert_eq!(style.to_attr(), "display: inline; color: red;");
    }

    #[test]
    fn test_remove() {
        let mut style = InlineStyle::parse("display: block");
        style.remove("display");
        assert!(style.is_empty());
        assert_eq!(style.to_attr(), "");
    }
}
