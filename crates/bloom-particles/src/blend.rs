//! Chaos-to-target blending for whole particle sets

use crate::curves::particle_blend;
use crate::formation::ParticleSet;

/// Blend every particle between its chaos and target position.
///
/// `progress` is the layer's raw progress in [0, 1]; each particle gets its own
/// eased factor from [`particle_blend`]. `out` receives `xyz` triples and must
/// hold at least `3 * set.len()` floats; extra entries are left untouched.
pub fn blend_positions(set: &ParticleSet, progress: f32, stagger: f32, out: &mut [f32]) {
    let count = set.len().min(out.len() / 3);
    let chaos = set.chaos_positions();
    let target = set.target_positions();
    let factors = set.random_factors();

    for i in 0..count {
        let w = particle_blend(progress, factors[i], stagger);
        let iw = 1.0 - w;
        let base = i * 3;
        out[base] = chaos[base] * iw + target[base] * w;
        out[base + 1] = chaos[base + 1] * iw + target[base + 1] * w;
        out[base + 2] = chaos[base + 2] * iw + target[base + 2] * w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::generate_particle_set;
    use crate::shape::FormationShape;

    #[test]
    fn zero_progress_is_chaos() {
        let set = generate_particle_set(100, &FormationShape::default());
        let mut out = vec![0.0; set.len() * 3];
        blend_positions(&set, 0.0, 0.3, &mut out);
        assert_eq!(&out[..], set.chaos_positions());
    }

    #[test]
    fn full_progress_is_target() {
        let set = generate_particle_set(100, &FormationShape::default());
        let mut out = vec![0.0; set.len() * 3];
        blend_positions(&set, 1.0, 0.3, &mut out);
        for (a, b) in out.iter().zip(set.target_positions()) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn short_buffer_is_not_overrun() {
        let set = generate_particle_set(10, &FormationShape::default());
        let mut out = vec![0.0; 7];
        blend_positions(&set, 0.5, 0.3, &mut out);
        assert_eq!(out[6], 0.0);
    }
}
