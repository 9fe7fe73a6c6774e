//! Summary -> detail resolution
//!
//! Resolution runs on every activation and is never cached, so a detail that
//! appears later is picked up and one that disappears is reported.

use crate::error::{DetailLookup, Result, StretchError};
use crate::DomHost;

/// Hyperlink summaries show their detail as a block, others inline, and
/// they locate it differently.
pub fn is_hyperlink<H: DomHost>(host: &H, summary: &H::Handle) -> bool {
    host.tag_name(summary).eq_ignore_ascii_case("a")
}

/// Id referenced by a hyperlink summary's `href`, with one leading `#`
/// removed. A missing `href` gives the empty id, which matches nothing.
pub fn target_id<H: DomHost>(host: &H, summary: &H::Handle) -> String {
    let href = host.attribute(summary, "href").unwrap_or_default();
    match href.strip_prefix('#') {
        Some(id) => id.to_string(),
        None => href,
    }
}

/// Find the detail element paired with `summary`
pub fn resolve_detail<H: DomHost>(host: &H, summary: &H::Handle) -> Result<H::Handle> {
    if is_hyperlink(host, summary) {
        let id = target_id(host, summary);
        let found = if id.is_empty() { None } else { host.element_by_id(&id) };
        found.ok_or(StretchError::DetailNotFound(DetailLookup::TargetId(id)))
    } else {
        host.next_element_sibling(summary).ok_or_else(|| {
            StretchError::DetailNotFound(DetailLookup::NextSibling {
                summary: host.describe(summary),
            })
        })
    }
}
