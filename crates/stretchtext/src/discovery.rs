//! Summary discovery

use crate::{Config, DomHost};

/// All summary elements in the document: attribute matches first, then
/// class matches, each in document order.
///
/// With [`Config::dedupe_summaries`] an element matching both rules is
/// listed once, at its first position. Without it the two groups are simply
/// concatenated.
pub fn discover<H: DomHost>(host: &H, config: &Config) -> Vec<H::Handle> {
    let by_attribute = host.elements_with_attribute(
        &config.summary_attribute,
        &config.summary_attribute_value,
    );
    let by_class = host.elements_with_class(&config.summary_class);

    tracing::debug!(
        by_attribute = by_attribute.len(),
        by_class = by_class.len(),
        "Discovered stretch summaries"
    );

    let mut summaries = by_attribute;
    if config.dedupe_summaries {
        for handle in by_class {
            if !summaries.contains(&handle) {
                summaries.push(handle);
            }
        }
    } else {
        summaries.extend(by_class);
    }
    summaries
}

#[cfg(all(test, feature = "page"))]
mod tests {
    use super::*;

    const MARKUP: &str = r#"<body>
        <span class="stretchsummary" id="c1">one</span><span>d</span>
        <span epub-type="stretchsummary" id="a1">two</span><span>d</span>
        <span epub-type="stretchsummary" class="stretchsummary" id="both">three</span><span>d</span>
    </body>"#;

    fn ids(doc: &stretch_dom::Document, handles: &[stretch_dom::NodeId]) -> Vec<String> {
        handles.iter()
            .filter_map(|&h| doc.get_attribute(h, "id").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_attribute_group_comes_first() {
        let doc = stretch_html::parse(MARKUP).unwrap();
        let found = discover(&doc, &Config::default());
        assert_eq!(ids(&doc, &found), vec!["a1", "both", "c1"]);
    }

    #[test]
    fn test_literal_concatenation_keeps_duplicates() {
        let doc = stretch_html::parse(MARKUP).unwrap();
        let config = Config { dedupe_summaries: false, ..Config::default() };
        let found = discover(&doc, &config);
        assert_eq!(ids(&doc, &found), vec!["a1", "both", "c1", "both"]);
    }

    #[test]
    fn test_empty_document() {
        let doc = stretch_html::parse("<p>nothing here</p>").unwrap();
        assert!(discover(&doc, &Config::default()).is_empty());
    }
}
