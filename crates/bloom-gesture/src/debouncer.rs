//! Run-length debouncing of per-frame classifications into mode commits

use crate::classifier::GestureKind;
use bloom_runtime::Mode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// A run must exceed this many consecutive frames before it commits.
    /// 5 frames is roughly 80 ms at 60 fps.
    pub threshold: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { threshold: 5 }
    }
}

/// Turns a noisy classification stream into at most one commit per sustained pose.
///
/// Open hand commits Chaos, closed hand commits Formed. An opposite pose zeroes
/// the other run, an ambiguous pose zeroes both, and a missing hand only decays
/// both runs by one.
#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    pub config: DebounceConfig,
    open_run: u32,
    closed_run: u32,
    last_committed: Mode,
}

impl GestureDebouncer {
    pub fn new(config: DebounceConfig, initial: Mode) -> Self {
        Self {
            config,
            open_run: 0,
            closed_run: 0,
            last_committed: initial,
        }
    }

    pub fn open_run(&self) -> u32 {
        self.open_run
    }

    pub fn closed_run(&self) -> u32 {
        self.closed_run
    }

    pub fn last_committed(&self) -> Mode {
        self.last_committed
    }

    /// Feed one frame. Returns the mode to commit, if this frame commits one.
    pub fn update(&mut self, kind: GestureKind) -> Option<Mode> {
        match kind {
            GestureKind::None => {
                self.open_run = self.open_run.saturating_sub(1);
                self.closed_run = self.closed_run.saturating_sub(1);
                None
            }
            GestureKind::Ambiguous => {
                self.open_run = 0;
                self.closed_run = 0;
                None
            }
            GestureKind::Open => {
                self.open_run = self.open_run.saturating_add(1);
                self.closed_run = 0;
                self.commit_if(self.open_run, Mode::Chaos)
            }
            GestureKind::Closed => {
                self.closed_run = self.closed_run.saturating_add(1);
                self.open_run = 0;
                self.commit_if(self.closed_run, Mode::Formed)
            }
        }
    }

    fn commit_if(&mut self, run: u32, mode: Mode) -> Option<Mode> {
        if run > self.config.threshold && self.last_committed != mode {
            self.last_committed = mode;
            Some(mode)
        } else {
            None
        }
    }

    /// Record a mode set from outside the gesture pipeline.
    ///
    /// Both runs restart from zero, so a pose held through the override needs a
    /// fresh full run before it can take the mode back.
    pub fn sync_external(&mut self, mode: Mode) {
        self.last_committed = mode;
        self.open_run = 0;
        self.closed_run = 0;
    }
}
