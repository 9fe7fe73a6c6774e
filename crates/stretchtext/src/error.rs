//! Error types

/// Which lookup failed while resolving a summary's detail element
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetailLookup {
    /// Hyperlink summary whose `href` names an id not in the document
    #[error("No StretchText details element with ID: {0}")]
    TargetId(String),
    /// Container summary with no following element sibling
    #[error("No StretchText details element found for: {summary}")]
    NextSibling {
        /// Description of the summary element
        summary: String,
    },
}

/// StretchText errors. None of them are fatal; the affected summary just
/// stays inert for that activation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StretchError {
    #[error("{0}")]
    DetailNotFound(DetailLookup),
}

pub type Result<T> = std::result::Result<T, StretchError>;
