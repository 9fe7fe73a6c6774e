//! Frame scheduling
//!
//! Class toggles are deferred to the next frame so the display change is
//! committed first; CSS transitions do not run from `display: none`.

use crate::SchedulerPreference;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// "Run once before the next paint"
pub trait FrameScheduler<T> {
    fn schedule(&mut self, task: T);
}

/// Collects tasks without running them. Useful when the caller drives
/// frames itself.
impl<T> FrameScheduler<T> for Vec<T> {
    fn schedule(&mut self, task: T) {
        self.push(task);
    }
}

/// Concrete scheduling strategy picked at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerMode {
    /// Host per-frame callback (`requestAnimationFrame` or equivalent)
    AnimationFrame,
    /// Fixed-delay timer
    Timer { interval: Duration },
}

impl SchedulerMode {
    /// Pick a mode from the configured preference and what the host offers.
    ///
    /// Asking for animation frames on a host without them still falls back
    /// to the timer.
    pub fn select(preference: SchedulerPreference, animation_frames: bool, fallback: Duration) -> Self {
        match preference {
            SchedulerPreference::Timer => Self::Timer { interval: fallback },
            SchedulerPreference::Auto | SchedulerPreference::AnimationFrame if animation_frames => {
                Self::AnimationFrame
            }
            SchedulerPreference::AnimationFrame => {
                tracing::warn!("Animation frames unavailable, using {:?} timer", fallback);
                Self::Timer { interval: fallback }
            }
            SchedulerPreference::Auto => Self::Timer { interval: fallback },
        }
    }
}

/// Deferred tasks for a host that pumps frames explicitly
#[derive(Debug)]
pub struct FrameQueue<T> {
    mode: SchedulerMode,
    tasks: VecDeque<(Instant, T)>,
}

impl<T> FrameQueue<T> {
    pub fn new(mode: SchedulerMode) -> Self {
        Self {
            mode,
            tasks: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> SchedulerMode {
        self.mode
    }

    /// Number of tasks waiting
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove and return every task due at `now`, oldest first.
    ///
    /// Animation-frame tasks are due on the next frame; timer tasks once
    /// their interval has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while let Some((at, _)) = self.tasks.front() {
            if *at > now {
                break;
            }
            if let Some((_, task)) = self.tasks.pop_front() {
                due.push(task);
            }
        }
        due
    }

    /// Time until the earliest task is due
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.tasks.front().map(|(at, _)| at.saturating_duration_since(now))
    }
}

impl<T> FrameScheduler<T> for FrameQueue<T> {
    fn schedule(&mut self, task: T) {
        let now = Instant::now();
        let due = match self.mode {
            SchedulerMode::AnimationFrame => now,
            SchedulerMode::Timer { interval } => now + interval,
        };
        self.tasks.push_back((due, task));
    }
}
