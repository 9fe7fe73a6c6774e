//! Toggle state machine
//!
//! A toggle runs in two halves. [`begin`] resolves the detail and changes its
//! display right away, then queues a [`DeferredToggle`]. [`finish`] runs on
//! the next frame and flips the marker class on both elements.
//!
//! Nothing serializes two presses on the same pair: if a second press lands
//! before the first deferred half runs, both read the old state, both set the
//! same display, and the two class flips cancel out.

use crate::error::Result;
use crate::{label, resolve, Config, Display, DomHost, FrameScheduler};

/// Open/closed state of a summary/detail pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Closed,
    Open,
}

impl ToggleState {
    /// Current state, read from the summary's marker class
    pub fn of<H: DomHost>(host: &H, config: &Config, summary: &H::Handle) -> Self {
        if host.has_class(summary, &config.open_class) {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Second half of a toggle, waiting for the next frame
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredToggle<E> {
    pub summary: E,
    pub detail: E,
}

/// Synchronous half of a toggle.
///
/// Returns the state the pair was in when pressed. A missing detail is
/// reported through the host and leaves everything untouched.
pub fn begin<H, S>(
    config: &Config,
    host: &mut H,
    scheduler: &mut S,
    summary: &H::Handle,
) -> Result<ToggleState>
where
    H: DomHost,
    S: FrameScheduler<DeferredToggle<H::Handle>>,
{
    let detail = match resolve::resolve_detail(host, summary) {
        Ok(detail) => detail,
        Err(err) => {
            host.report(&err);
            return Err(err);
        }
    };

    let state = ToggleState::of(host, config, summary);
    let display = match state {
        ToggleState::Open => Display::None,
        ToggleState::Closed if resolve::is_hyperlink(host, summary) => Display::Block,
        ToggleState::Closed => Display::Inline,
    };
    host.set_display(&detail, display);
    let display_name = display.as_str();
    tracing::debug!(?state, display = display_name, "Toggling stretch summary");

    scheduler.schedule(DeferredToggle {
        summary: summary.clone(),
        detail,
    });
    Ok(state)
}

/// Deferred half of a toggle. Returns the pair's new state.
pub fn finish<H: DomHost>(config: &Config, host: &mut H, task: &DeferredToggle<H::Handle>) -> ToggleState {
    let open = host.toggle_class(&task.summary, &config.open_class);
    host.toggle_class(&task.detail, &config.open_class);

    if config.refresh_label_on_toggle {
        label::refresh(host, config, &task.summary, open);
    }

    if open { ToggleState::Open } else { ToggleState::Closed }
}

#[cfg(all(test, feature = "page"))]
mod tests {
    use super::*;
    use crate::{DetailLookup, StretchError};
    use stretch_dom::{Document, NodeId};

    fn setup(html: &str) -> (Document, NodeId) {
        let doc = stretch_html::parse(html).unwrap();
        let summary = doc.get_element_by_id("s").unwrap();
        (doc, summary)
    }

    #[test]
    fn test_open_then_close_inline() {
        let (mut doc, s) = setup(r#"<span id="s">s</span><span id="d">d</span>"#);
        let d = doc.get_element_by_id("d").unwrap();
        let config = Config::default();
        let mut frames = Vec::new();

        assert_eq!(begin(&config, &mut doc, &mut frames, &s), Ok(ToggleState::Closed));
        assert_eq!(doc.style_property(d, "display").as_deref(), Some("inline"));
        assert!(!doc.has_class(s, "stretchtext-open"), "class flips only on the next frame");

        assert_eq!(finish(&config, &mut doc, &frames.remove(0)), ToggleState::Open);
        assert!(doc.has_class(s, "stretchtext-open"));
        assert!(doc.has_class(d, "stretchtext-open"));

        assert_eq!(begin(&config, &mut doc, &mut frames, &s), Ok(ToggleState::Open));
        assert_eq!(doc.style_property(d, "display").as_deref(), Some("none"));
        assert_eq!(finish(&config, &mut doc, &frames.remove(0)), ToggleState::Closed);
        assert!(!doc.has_class(s, "stretchtext-open"));
        assert!(!doc.has_class(d, "stretchtext-open"));
    }

    #[test]
    fn test_hyperlink_opens_as_block() {
        let (mut doc, s) = setup(r##"<a id="s" href="#d">s</a><p>between</p><div id="d">d</div>"##);
        let d = doc.get_element_by_id("d").unwrap();
        let mut frames = Vec::new();

        begin(&Config::default(), &mut doc, &mut frames, &s).unwrap();

        assert_eq!(doc.style_property(d, "display").as_deref(), Some("block"));
        assert_eq!(frames, vec![DeferredToggle { summary: s, detail: d }]);
    }

    #[test]
    fn test_missing_detail_schedules_nothing() {
        let (mut doc, s) = setup(r##"<a id="s" href="#gone">s</a>"##);
        let mut frames = Vec::new();

        let result = begin(&Config::default(), &mut doc, &mut frames, &s);

        assert_eq!(
            result,
            Err(StretchError::DetailNotFound(DetailLookup::TargetId("gone".to_string())))
        );
        assert!(frames.is_empty());
        assert!(!doc.has_class(s, "stretchtext-open"));
    }

    #[test]
    fn test_custom_open_class() {
        let (mut doc, s) = setup(r#"<span id="s">s</span><span id="d">d</span>"#);
        let config = Config { open_class: "is-open".to_string(), ..Config::default() };
        let mut frames = Vec::new();

        begin(&config, &mut doc, &mut frames, &s).unwrap();
        finish(&config, &mut doc, &frames[0]);

        assert!(doc.has_class(s, "is-open"));
        assert!(!doc.has_class(s, "stretchtext-open"));
    }
}
