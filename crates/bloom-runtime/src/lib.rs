//! Bloom Runtime - frame loop infrastructure
//!
//! Provides the building blocks shared by every animated layer:
//! - `Mode` / `ModeCell` / `ModeReader` - the process-wide CHAOS/FORMED state, atomically shared
//! - `ProgressInterpolator` - frame-rate independent smoothing toward the mode
//! - `ModeEvent` / `ModeEventBus` - exactly-once transition notifications
//! - `FrameClock` - elapsed/delta bookkeeping
//! - `RuntimeSystem` - trait for layers ticked once per frame

mod clock;
mod event_bus;
mod mode;
mod progress;
mod system;

pub use clock::FrameClock;
pub use event_bus::{ModeEvent, ModeEventBus, TransitionSource};
pub use mode::{Mode, ModeCell, ModeReader};
pub use progress::{step_progress, ProgressInterpolator};
pub use system::{FrameContext, RuntimeSystem};
