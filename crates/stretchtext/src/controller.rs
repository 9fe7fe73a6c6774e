//! ToggleController - discovery, handler attachment and activation

use crate::error::Result;
use crate::toggle::{self, DeferredToggle, ToggleState};
use crate::{discovery, label, ActivationEvent, Config, DomHost, FrameScheduler};

/// Initialization progress. Readiness may be signalled more than once;
/// only the first signal does any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    NotStarted,
    Completed,
}

/// Owns the discovered summary handles for one document
#[derive(Debug)]
pub struct ToggleController<H: DomHost> {
    config: Config,
    lifecycle: Lifecycle,
    summaries: Vec<H::Handle>,
}

impl<H: DomHost> ToggleController<H> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::NotStarted,
            summaries: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Summaries found at initialization, in discovery order
    pub fn summaries(&self) -> &[H::Handle] {
        &self.summaries
    }

    /// Discover summaries, label them and attach handlers.
    ///
    /// Returns false (and does nothing) if initialization already ran.
    pub fn initialize(&mut self, host: &mut H) -> bool {
        if self.lifecycle == Lifecycle::Completed {
            tracing::trace!("StretchText already initialized");
            return false;
        }
        self.lifecycle = Lifecycle::Completed;

        self.summaries = discovery::discover(host, &self.config);
        for summary in &self.summaries {
            label::assign_initial(host, &self.config, summary);
            for event in ActivationEvent::ALL {
                host.add_listener(summary, event, event.listener());
            }
        }

        tracing::info!("StretchText initialized with {} summaries", self.summaries.len());
        true
    }

    /// Handle a press on `summary` (synchronous half of the toggle)
    pub fn activate<S>(&self, host: &mut H, scheduler: &mut S, summary: &H::Handle) -> Result<ToggleState>
    where
        S: FrameScheduler<DeferredToggle<H::Handle>>,
    {
        toggle::begin(&self.config, host, scheduler, summary)
    }

    /// Run a deferred toggle on the next frame
    pub fn complete(&self, host: &mut H, task: &DeferredToggle<H::Handle>) -> ToggleState {
        toggle::finish(&self.config, host, task)
    }

    /// Current state of a summary
    pub fn state(&self, host: &H, summary: &H::Handle) -> ToggleState {
        ToggleState::of(host, &self.config, summary)
    }
}
