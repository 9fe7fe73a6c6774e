//! Stretch HTML
//!
//! HTML5 parsing (built on html5ever) into a [`stretch_dom::Document`], and
//! serialization back to markup.

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::{HtmlSerializer, get_inner_html, get_outer_html};

use stretch_dom::Document;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
