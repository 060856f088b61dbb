//! Dual-position particle sets: every particle owns a chaos position and a
//! target position, fixed at construction.

use crate::rand::ParticleRng;
use crate::shape::FormationShape;
use bloom_core::Vec3;
use std::f32::consts::TAU;

/// 2π · (1 − 1/φ). Successive particles stepped by this angle never line up.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Fixed-size particle layout stored as parallel flat arrays for bulk upload.
///
/// `chaos_positions` and `target_positions` hold `xyz` triples; index `i` in
/// every array refers to the same particle.
#[derive(Debug, Clone, Default)]
pub struct ParticleSet {
    chaos_positions: Vec<f32>,
    target_positions: Vec<f32>,
    random_factors: Vec<f32>,
}

impl ParticleSet {
    pub fn len(&self) -> usize {
        self.random_factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.random_factors.is_empty()
    }

    pub fn chaos_positions(&self) -> &[f32] {
        &self.chaos_positions
    }

    pub fn target_positions(&self) -> &[f32] {
        &self.target_positions
    }

    pub fn random_factors(&self) -> &[f32] {
        &self.random_factors
    }

    pub fn chaos(&self, index: usize) -> Vec3 {
        read_vec3(&self.chaos_positions, index)
    }

    pub fn target(&self, index: usize) -> Vec3 {
        read_vec3(&self.target_positions, index)
    }

    pub fn random_factor(&self, index: usize) -> f32 {
        self.random_factors[index]
    }
}

fn read_vec3(flat: &[f32], index: usize) -> Vec3 {
    let i = index * 3;
    Vec3::new(flat[i], flat[i + 1], flat[i + 2])
}

fn push_vec3(flat: &mut Vec<f32>, v: Vec3) {
    flat.extend_from_slice(&[v.x, v.y, v.z]);
}

/// Build a particle set of `count` particles for `shape`.
///
/// Bit-identical for the same `(count, shape)`: chaos draws, jitter and random
/// factors each come from their own stream seeded by `shape.seed`.
pub fn generate_particle_set(count: usize, shape: &FormationShape) -> ParticleSet {
    let shape = shape.sanitized();

    let mut chaos_rng = ParticleRng::new(shape.seed);
    let mut jitter_rng = ParticleRng::new(shape.seed.wrapping_add(0x9E37_79B9));
    let mut factor_rng = ParticleRng::new(shape.seed.wrapping_add(0x7F4A_7C15));

    let mut set = ParticleSet {
        chaos_positions: Vec::with_capacity(count * 3),
        target_positions: Vec::with_capacity(count * 3),
        random_factors: Vec::with_capacity(count),
    };

    for i in 0..count {
        push_vec3(&mut set.chaos_positions, chaos_position(&shape, &mut chaos_rng));
        push_vec3(
            &mut set.target_positions,
            target_position(i, count, &shape, &mut jitter_rng),
        );
        set.random_factors.push(factor_rng.next_f32());
    }

    log::debug!(
        "generated particle set: {count} particles, seed {}, chaos extent {:.2}",
        shape.seed,
        shape.chaos_extent()
    );

    set
}

/// One point of the scattered cloud: a uniform spherical direction at a radius
/// drawn from the chaos shell, stretched per axis and lifted by `chaos_offset_y`.
pub fn chaos_position(shape: &FormationShape, rng: &mut ParticleRng) -> Vec3 {
    let radius = rng.range(shape.chaos_radius_min, shape.chaos_radius_max);
    let dir = Vec3::from_array(rng.spherical_direction());
    let mut p = (dir * radius).scale(&shape.chaos_scale);
    p.y += shape.chaos_offset_y;
    p
}

/// Rank-based canopy radius for particle `index` of `count`, before jitter.
///
/// `u = (index + 0.5) / count` keeps ranks evenly spaced and never divides by
/// zero for `count >= 1`; the exponent below 1 biases points toward the center.
pub fn target_radius(index: usize, count: usize, shape: &FormationShape) -> f32 {
    let u = (index as f32 + 0.5) / count.max(1) as f32;
    shape.max_radius * u.powf(shape.density_exponent)
}

/// Angle of particle `index` on the golden spiral, twisted by radius and
/// offset onto one of `arm_count` arms.
pub fn target_angle(index: usize, radius: f32, shape: &FormationShape) -> f32 {
    let arms = shape.arm_count.max(1);
    let arm_offset = (index as u32 % arms) as f32 * TAU / arms as f32;
    index as f32 * GOLDEN_ANGLE + radius * shape.spiral_twist + arm_offset
}

/// One point of the assembled canopy: golden-spiral angle, density-biased
/// radius, dome height that tapers toward the rim, plus jitter for volume.
pub fn target_position(
    index: usize,
    count: usize,
    shape: &FormationShape,
    rng: &mut ParticleRng,
) -> Vec3 {
    let radius = target_radius(index, count, shape);
    let theta = target_angle(index, radius, shape);

    let rim = if shape.max_radius > 0.0 {
        radius / shape.max_radius
    } else {
        0.0
    };
    let jittered_radius = (radius + rng.signed() * shape.radial_jitter).max(0.0);
    let y = shape.base_height
        + shape.height * (1.0 - shape.taper * rim)
        + rng.signed() * shape.height_jitter;

    Vec3::new(
        jittered_radius * theta.cos(),
        y,
        jittered_radius * theta.sin(),
    )
}
