//! Parser and serializer tests over realistic stretch text markup

use stretch_html::{HtmlSerializer, get_outer_html, parse};

const ARTICLE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Stretch</title></head>
<body>
  <p>The <span class="stretchsummary">fox</span><span>, which was quick and brown,</span> jumped.</p>
  <p><a href="#aside" epub-type="stretchsummary">Why?</a></p>
  <div id="aside">Because it could.</div>
</body>
</html>"##;

#[test]
fn test_parse_article_structure() {
    let doc = parse(ARTICLE).unwrap();

    assert_eq!(doc.title(), "Stretch");
    assert_eq!(doc.get_elements_by_class_name("stretchsummary").len(), 1);
    assert_eq!(doc.elements_with_attribute("epub-type", "stretchsummary").len(), 1);
    assert!(doc.get_element_by_id("aside").is_some());
}

#[test]
fn test_summary_sibling_is_detail_span() {
    let doc = parse(ARTICLE).unwrap();
    let summary = doc.get_elements_by_class_name("stretchsummary")[0];
    let detail = doc.tree().next_element_sibling(summary).unwrap();

    assert_eq!(doc.tree().text_content(detail), ", which was quick and brown,");
}

#[test]
fn test_whitespace_text_kept_between_elements() {
    let doc = parse("<body><span class=s>a</span>\n<em>b</em></body>").unwrap();
    let span = doc.get_elements_by_class_name("s")[0];
    let next = doc.tree().get(span).map(|n| n.next_sibling).unwrap();

    assert!(doc.tree().get(next).is_some_and(|n| n.is_text()));
    assert_eq!(doc.tree().tag_name(doc.tree().next_element_sibling(span).unwrap()), Some("em"));
}

#[test]
fn test_serialize_after_mutation() {
    let mut doc = parse(r#"<body><div id="d">x</div></body>"#).unwrap();
    let div = doc.get_element_by_id("d").unwrap();
    doc.toggle_class(div, "stretchtext-open");
    doc.set_style_property(div, "display", "block");

    assert_eq!(
        get_outer_html(doc.tree(), div),
        r#"<div id="d" class="stretchtext-open" style="display: block;">x</div>"#
    );
}

#[test]
fn test_serialize_full_document_contains_doctype() {
    let doc = parse(ARTICLE).unwrap();
    let html = HtmlSerializer::new().serialize_outer(doc.tree(), doc.tree().root());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r##"<a href="#aside" epub-type="stretchsummary">Why?</a>"##));
}

#[test]
fn test_entities_decoded_and_reescaped() {
    let doc = parse("<body><p id=p>fish &amp; chips</p></body>").unwrap();
    let p = doc.get_element_by_id("p").unwrap();

    assert_eq!(doc.tree().text_content(p), "fish & chips");
    assert_eq!(get_outer_html(doc.tree(), p), r#"<p id="p">fish &amp; chips</p>"#);
}
