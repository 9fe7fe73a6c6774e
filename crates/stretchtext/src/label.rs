//! Action hint ("Expand" / "Collapse") on summaries
//!
//! The hint is written once at discovery. The post-toggle refresh only
//! writes when the label attribute is absent, so after discovery it does
//! nothing unless something else removed the attribute.

use crate::{Config, DomHost};

/// Give a freshly discovered summary the closed-state hint.
///
/// Returns false when an author label was kept instead.
pub fn assign_initial<H: DomHost>(host: &mut H, config: &Config, summary: &H::Handle) -> bool {
    if config.preserve_author_labels && host.has_attribute(summary, &config.label_attribute) {
        return false;
    }
    host.set_attribute(summary, &config.label_attribute, &config.label_closed);
    true
}

/// Update the hint after a toggle, unless any label is already present
pub fn refresh<H: DomHost>(host: &mut H, config: &Config, summary: &H::Handle, open: bool) {
    if host.has_attribute(summary, &config.label_attribute) {
        return;
    }
    let label = if open { &config.label_open } else { &config.label_closed };
    host.set_attribute(summary, &config.label_attribute, label);
}
