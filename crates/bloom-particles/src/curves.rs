//! Scalar easing and interpolation helpers

use bloom_core::smoothstep;

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Largest stagger accepted by [`particle_blend`]. Keeps the divisor away from zero.
pub const MAX_STAGGER: f32 = 0.95;

/// Per-particle blend factor.
///
/// `progress` is the layer's raw progress in [0, 1]. Each particle starts moving
/// once progress passes `random_factor * stagger`, so particles with a higher
/// random factor lag behind; all particles arrive together at progress 1.
pub fn particle_blend(progress: f32, random_factor: f32, stagger: f32) -> f32 {
    let stagger = stagger.clamp(0.0, MAX_STAGGER);
    let delay = random_factor.clamp(0.0, 1.0) * stagger;
    let local = (progress - delay) / (1.0 - stagger);
    smoothstep(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_f32_endpoints() {
        assert!((lerp_f32(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn higher_random_factor_lags() {
        let early = particle_blend(0.4, 0.1, 0.3);
        let late = particle_blend(0.4, 0.9, 0.3);
        assert!(early > late);
    }

    #[test]
    fn blend_is_exact_at_the_ends() {
        for rf in [0.0, 0.25, 0.5, 0.999] {
            assert_eq!(particle_blend(0.0, rf, 0.3), 0.0);
            assert_eq!(particle_blend(1.0, rf, 0.3), 1.0);
        }
    }

    #[test]
    fn stagger_is_clamped() {
        let v = particle_blend(0.5, 1.0, 5.0);
        assert!(v.is_finite());
    }
}
