//! Photo cards: a small spread ring that tightens as the canopy forms

use crate::config::PhotoConfig;
use bloom_core::{Result, Vec3};
use bloom_particles::curves::lerp_f32;
use bloom_particles::spread;
use bloom_runtime::{FrameContext, Mode, ProgressInterpolator, RuntimeSystem};

pub struct PhotoLayer {
    config: PhotoConfig,
    progress: ProgressInterpolator,
    positions: Vec<Vec3>,
}

impl PhotoLayer {
    pub fn new(config: PhotoConfig, mode: Mode) -> Self {
        let progress = ProgressInterpolator::settled(config.rate, mode);
        let mut layer = Self {
            config,
            progress,
            positions: Vec::new(),
        };
        layer.refresh();
        layer
    }

    /// Spread easing for the current progress: 1 in chaos, `formed_easing` once formed
    pub fn easing(&self) -> f32 {
        lerp_f32(1.0, self.config.formed_easing, self.progress.eased())
    }

    fn refresh(&mut self) {
        let options = self.config.spread.with_easing(self.easing());
        let lift = Vec3::new(0.0, self.config.center_y, 0.0);
        self.positions = spread(self.config.count, &options)
            .into_iter()
            .map(|p| p + lift)
            .collect();
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn progress(&self) -> f32 {
        self.progress.progress()
    }
}

impl RuntimeSystem for PhotoLayer {
    fn update(&mut self, frame: &FrameContext) -> Result<()> {
        self.progress.step(frame.delta, frame.mode);
        self.refresh();
        Ok(())
    }

    fn name(&self) -> &str {
        "photos"
    }
}
