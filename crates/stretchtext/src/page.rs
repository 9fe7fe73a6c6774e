//! Page - a loaded document with StretchText running in it
//!
//! Stands in for the browser: it advances the document through its ready
//! states, dispatches input events to registered listeners and pumps the
//! frame queue.

use crate::toggle::{DeferredToggle, ToggleState};
use crate::{Config, FrameQueue, Listener, SchedulerMode, ToggleController};
use std::time::{Duration, Instant};
use stretch_dom::{Document, DomEvent, DomEventType, NodeId, ReadyState};

/// What the host environment offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Native per-frame callbacks are available
    pub animation_frames: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self { animation_frames: true }
    }
}

/// A loaded page
pub struct Page {
    document: Document,
    frames: FrameQueue<DeferredToggle<NodeId>>,
    controller: ToggleController<Document>,
    installed: bool,
}

impl Page {
    /// Wrap a parsed document. StretchText is not installed yet.
    pub fn new(document: Document, config: Config, capabilities: HostCapabilities) -> Self {
        let mode = SchedulerMode::select(
            config.scheduler,
            capabilities.animation_frames,
            config.frame_fallback(),
        );
        tracing::debug!("Page {} using {:?} scheduling", document.url(), mode);
        Self {
            document,
            frames: FrameQueue::new(mode),
            controller: ToggleController::new(config),
            installed: false,
        }
    }

    /// Parse `html` and run it through a full load with StretchText installed
    pub fn load(html: &str, config: Config) -> Result<Self, stretch_html::ParseError> {
        Self::load_with(html, "about:blank", config, HostCapabilities::default())
    }

    pub fn load_with(
        html: &str,
        url: &str,
        config: Config,
        capabilities: HostCapabilities,
    ) -> Result<Self, stretch_html::ParseError> {
        let document = stretch_html::HtmlParser::new().parse_with_url(html, url)?;
        let mut page = Self::new(document, config, capabilities);
        page.install();
        page.finish_parsing();
        page.finish_loading();
        Ok(page)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn controller(&self) -> &ToggleController<Document> {
        &self.controller
    }

    pub fn scheduler_mode(&self) -> SchedulerMode {
        self.frames.mode()
    }

    /// Register StretchText with the document.
    ///
    /// A document past `loading` is initialized on the spot; otherwise
    /// initialization waits for DOMContentLoaded, with load as a second
    /// signal. Every route ends in the same idempotent initializer, so
    /// installing twice is harmless.
    pub fn install(&mut self) {
        if !self.installed {
            self.installed = true;
            for event_type in [DomEventType::DOMContentLoaded, DomEventType::Load] {
                self.document.listeners_mut().add_listener(
                    NodeId::ROOT,
                    event_type,
                    Listener::Initialize.callback_id(),
                );
            }
        }
        if self.document.ready_state() >= ReadyState::Interactive {
            self.controller.initialize(&mut self.document);
        }
    }

    /// Parsing finished: `interactive` + DOMContentLoaded
    pub fn finish_parsing(&mut self) {
        if self.document.ready_state() >= ReadyState::Interactive {
            return;
        }
        self.document.set_ready_state(ReadyState::Interactive);
        self.dispatch(NodeId::ROOT, DomEventType::ReadyStateChange);
        self.dispatch(NodeId::ROOT, DomEventType::DOMContentLoaded);
    }

    /// Subresources finished: `complete` + load
    pub fn finish_loading(&mut self) {
        self.finish_parsing();
        if self.document.ready_state() == ReadyState::Complete {
            return;
        }
        self.document.set_ready_state(ReadyState::Complete);
        self.dispatch(NodeId::ROOT, DomEventType::ReadyStateChange);
        self.dispatch(NodeId::ROOT, DomEventType::Load);
    }

    /// Dispatch an event at `target`, bubbling through its ancestors.
    ///
    /// Returns the event so callers can inspect whether the default action
    /// was prevented.
    pub fn dispatch(&mut self, target: NodeId, event_type: DomEventType) -> DomEvent {
        let mut event = DomEvent::new(event_type, target);
        for node in self.document.tree().ancestors(target) {
            event.current_target = Some(node);
            for callback in self.document.listeners().get_listeners(node, event_type) {
                match Listener::from_callback_id(callback) {
                    Some(listener) => self.run_listener(listener, node, &mut event),
                    None => tracing::warn!("Unknown listener {} on {}", callback, node),
                }
            }
            if !event.bubbles || event.is_propagation_stopped() {
                break;
            }
        }
        event
    }

    fn run_listener(&mut self, listener: Listener, node: NodeId, event: &mut DomEvent) {
        match listener {
            Listener::Toggle => {
                event.prevent_default();
                // Failures were already reported through the host
                let _ = self.controller.activate(&mut self.document, &mut self.frames, &node);
            }
            Listener::SuppressNavigation => event.prevent_default(),
            Listener::Initialize => {
                self.controller.initialize(&mut self.document);
            }
        }
    }

    /// Primary mouse button press
    pub fn press(&mut self, target: NodeId) -> DomEvent {
        self.dispatch(target, DomEventType::MouseDown)
    }

    /// Touch start
    pub fn touch(&mut self, target: NodeId) -> DomEvent {
        self.dispatch(target, DomEventType::TouchStart)
    }

    /// Click. Returns true if the default action (navigation) would run.
    pub fn click(&mut self, target: NodeId) -> bool {
        !self.dispatch(target, DomEventType::Click).is_default_prevented()
    }

    /// Press followed by the frame that completes the toggle
    pub fn activate(&mut self, target: NodeId) -> DomEvent {
        let event = self.press(target);
        self.run_frame_at(Instant::now() + self.frame_interval());
        event
    }

    /// Run the frame callbacks due now. Returns how many toggles completed.
    pub fn run_frame(&mut self) -> usize {
        self.run_frame_at(Instant::now())
    }

    /// Run the frame callbacks due at `now`
    pub fn run_frame_at(&mut self, now: Instant) -> usize {
        let due = self.frames.take_due(now);
        for task in &due {
            let state = self.controller.complete(&mut self.document, task);
            tracing::trace!(?state, summary = %task.summary, "Deferred toggle completed");
        }
        due.len()
    }

    /// Deferred toggles not yet run
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Delay after which every queued toggle is due
    pub fn frame_interval(&self) -> Duration {
        match self.frames.mode() {
            SchedulerMode::AnimationFrame => Duration::ZERO,
            SchedulerMode::Timer { interval } => interval,
        }
    }

    pub fn state(&self, summary: NodeId) -> ToggleState {
        self.controller.state(&self.document, &summary)
    }

    pub fn is_open(&self, summary: NodeId) -> bool {
        self.state(summary).is_open()
    }
}
