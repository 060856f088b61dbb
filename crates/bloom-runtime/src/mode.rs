//! The two-state formation mode and its shared cell

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Which arrangement the scene is heading toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scattered
    #[default]
    Chaos,
    /// Assembled into the canopy
    Formed,
}

impl Mode {
    /// Progress value this mode pulls toward: 0 for chaos, 1 for formed
    pub fn target_value(self) -> f32 {
        match self {
            Mode::Chaos => 0.0,
            Mode::Formed => 1.0,
        }
    }

    fn to_u8(self) -> u8 {
        match self {
            Mode::Chaos => 0,
            Mode::Formed => 1,
        }
    }

    fn from_u8(v: u8) -> Self {
        if v == 0 {
            Mode::Chaos
        } else {
            Mode::Formed
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Chaos => write!(f, "chaos"),
            Mode::Formed => write!(f, "formed"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chaos" => Ok(Mode::Chaos),
            "formed" => Ok(Mode::Formed),
            other => Err(format!("unknown mode '{other}'; expected chaos or formed")),
        }
    }
}

/// Shared handle to the current mode.
///
/// Clones observe the same value. Writes are a single atomic swap, so a reader
/// always sees a fully committed mode.
#[derive(Debug, Clone)]
pub struct ModeCell {
    inner: Arc<AtomicU8>,
}

impl ModeCell {
    pub fn new(initial: Mode) -> Self {
        Self {
            inner: Arc::new(AtomicU8::new(initial.to_u8())),
        }
    }

    pub fn get(&self) -> Mode {
        Mode::from_u8(self.inner.load(Ordering::Acquire))
    }

    /// Overwrite the mode. Returns true only if the stored value changed.
    pub fn set(&self, mode: Mode) -> bool {
        let previous = self.inner.swap(mode.to_u8(), Ordering::AcqRel);
        previous != mode.to_u8()
    }

    /// Read-only view sharing this cell's value
    pub fn reader(&self) -> ModeReader {
        ModeReader {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Read side of a [`ModeCell`]. Holders can observe the mode but never change it.
#[derive(Debug, Clone)]
pub struct ModeReader {
    inner: Arc<AtomicU8>,
}

impl ModeReader {
    pub fn get(&self) -> Mode {
        Mode::from_u8(self.inner.load(Ordering::Acquire))
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new(Mode::Chaos)
    }
}
