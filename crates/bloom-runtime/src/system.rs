//! Runtime system trait

use crate::mode::Mode;
use bloom_core::Result;

/// Everything a layer may read during one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub elapsed: f32,
    pub delta: f32,
    /// Mode committed before this frame's updates began
    pub mode: Mode,
}

/// A layer ticked once per frame by the scene.
///
/// Layers are updated in registration order and own all of their per-frame
/// state; the only shared input is the mode in [`FrameContext`].
pub trait RuntimeSystem {
    /// Called once when the layer is first registered
    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once per frame
    fn update(&mut self, frame: &FrameContext) -> Result<()>;

    /// Called when the layer is being shut down
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    /// Human-readable name for this layer
    fn name(&self) -> &str;
}
