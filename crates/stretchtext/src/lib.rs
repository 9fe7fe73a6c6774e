//! StretchText
//!
//! Expandable inline text. A *summary* element, marked with
//! `epub-type="stretchsummary"` or class `stretchsummary`, reveals or hides
//! its *detail* element when pressed:
//!
//! - a hyperlink summary (`<a href="#id">`) controls the element with that id
//!   and shows it as a block;
//! - any other summary controls its next element sibling and shows it inline.
//!
//! Both elements carry the `stretchtext-open` class while open. The class is
//! flipped one frame after the display change so CSS transitions can run.
//!
//! The state machine is written against [`DomHost`], so it runs on the native
//! [`stretch_dom`] document (see [`Page`], behind the default `page` feature)
//! as well as on a browser DOM.
//!
//! # Example
//! ```rust,ignore
//! use stretchtext::{Config, Page};
//!
//! let mut page = Page::load(html, Config::default())?;
//! let summary = page.controller().summaries()[0];
//! page.activate(summary);
//! assert!(page.is_open(summary));
//! ```

mod config;
mod controller;
mod discovery;
mod error;
mod host;
mod label;
mod resolve;
mod scheduler;
mod toggle;

#[cfg(feature = "page")]
mod document_host;
#[cfg(feature = "page")]
mod page;

pub use config::{Config, SchedulerPreference};
pub use controller::{Lifecycle, ToggleController};
pub use discovery::discover;
pub use error::{DetailLookup, Result, StretchError};
pub use host::{ActivationEvent, Display, DomHost, Listener};
pub use label::{assign_initial as assign_initial_label, refresh as refresh_label};
pub use resolve::{is_hyperlink, resolve_detail, target_id};
pub use scheduler::{FrameQueue, FrameScheduler, SchedulerMode};
pub use toggle::{DeferredToggle, ToggleState, begin as begin_toggle, finish as finish_toggle};

#[cfg(feature = "page")]
pub use page::{HostCapabilities, Page};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
