//! A dual-position particle layer (foliage, petals)

use crate::config::LayerConfig;
use bloom_core::Result;
use bloom_particles::{
    blend_positions, generate_particle_set, pack_instances, ParticleInstance, ParticleSet,
};
use bloom_runtime::{FrameContext, Mode, ProgressInterpolator, RuntimeSystem};

/// Owns one particle set and everything that changes about it per frame.
pub struct FormationLayer {
    name: String,
    config: LayerConfig,
    set: ParticleSet,
    progress: ProgressInterpolator,
    positions: Vec<f32>,
    instances: Vec<ParticleInstance>,
}

impl FormationLayer {
    /// Build the layer already settled on `mode`, with positions filled in.
    pub fn new(name: &str, config: LayerConfig, mode: Mode) -> Self {
        let set = generate_particle_set(config.count, &config.shape);
        let progress = ProgressInterpolator::settled(config.rate, mode);
        let mut layer = Self {
            name: name.to_string(),
            positions: vec![0.0; set.len() * 3],
            instances: Vec::with_capacity(set.len()),
            config,
            set,
            progress,
        };
        layer.refresh();
        layer
    }

    fn refresh(&mut self) {
        let p = self.progress.progress();
        blend_positions(&self.set, p, self.config.stagger, &mut self.positions);
        pack_instances(
            &self.set,
            &self.positions,
            self.config.size,
            self.config.size_variance,
            self.config.color,
            self.progress.eased(),
            &mut self.instances,
        );
    }

    pub fn set(&self) -> &ParticleSet {
        &self.set
    }

    /// Blended `xyz` triples, one per particle
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn progress(&self) -> f32 {
        self.progress.progress()
    }

    pub fn eased_progress(&self) -> f32 {
        self.progress.eased()
    }
}

impl RuntimeSystem for FormationLayer {
    fn initialize(&mut self) -> Result<()> {
        log::info!("[{}] {} particles", self.name, self.set.len());
        Ok(())
    }

    fn update(&mut self, frame: &FrameContext) -> Result<()> {
        self.progress.step(frame.delta, frame.mode);
        self.refresh();
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(count: usize) -> LayerConfig {
        LayerConfig {
            count,
            ..LayerConfig::foliage()
        }
    }

    fn frame(delta: f32, mode: Mode) -> FrameContext {
        FrameContext {
            elapsed: 0.0,
            delta,
            mode,
        }
    }

    #[test]
    fn starts_on_chaos_positions() {
        let layer = FormationLayer::new("foliage", small(50), Mode::Chaos);
        assert_eq!(layer.positions(), layer.set().chaos_positions());
        assert_eq!(layer.instances().len(), 50);
    }

    #[test]
    fn starts_on_target_when_formed() {
        let layer = FormationLayer::new("foliage", small(20), Mode::Formed);
        for (a, b) in layer.positions().iter().zip(layer.set().target_positions()) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn update_moves_toward_mode() {
        let mut layer = FormationLayer::new("foliage", small(10), Mode::Chaos);
        layer.update(&frame(0.1, Mode::Formed)).unwrap();
        assert!(layer.progress() > 0.0 && layer.progress() < 1.0);
        assert_eq!(layer.instances()[0].anim[1], layer.eased_progress());
    }

    #[test]
    fn empty_layer_updates() {
        let mut layer = FormationLayer::new("empty", small(0), Mode::Chaos);
        layer.update(&frame(0.016, Mode::Formed)).unwrap();
        assert!(layer.positions().is_empty());
        assert!(layer.instances().is_empty());
    }
}
