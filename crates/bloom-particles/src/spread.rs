//! Stateless scatter layout for a handful of larger items (photo cards).
//!
//! Unlike [`crate::formation`], every value here is a pure function of the item
//! index, so the layout can be recomputed every frame while `easing` animates.

use crate::rand::{hash_range, hash_signed};
use bloom_core::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadOptions {
    /// Exclusion-zone floor; no item sits closer to the axis than this
    pub radius_base: f32,
    pub radius_max: f32,
    /// Half-range of the vertical scatter around 0
    pub height_jitter: f32,
    /// Half-range of angular jitter in radians
    pub angle_jitter: f32,
    /// Scales radius and height; 0 collapses the layout, 1 spreads it fully
    pub easing: f32,
    /// Base seed, offset per jittered dimension
    pub seed: u32,
    pub angle_seed_offset: u32,
    pub radius_seed_offset: u32,
    pub height_seed_offset: u32,
}

impl Default for SpreadOptions {
    fn default() -> Self {
        Self {
            radius_base: 6.0,
            radius_max: 11.0,
            height_jitter: 4.0,
            angle_jitter: 0.28,
            easing: 1.0,
            seed: 0,
            angle_seed_offset: 101,
            radius_seed_offset: 211,
            height_seed_offset: 307,
        }
    }
}

impl SpreadOptions {
    pub fn with_easing(&self, easing: f32) -> Self {
        Self {
            easing,
            ..self.clone()
        }
    }
}

/// Evenly spaced base angle for item `index` of `count`, before jitter.
pub fn base_angle(index: usize, count: usize) -> f32 {
    (index as f32 / count.max(1) as f32) * TAU
}

/// Scatter `count` items around the vertical axis. Returns exactly `count` points.
pub fn spread(count: usize, options: &SpreadOptions) -> Vec<Vec3> {
    let radius_base = options.radius_base.max(0.0);
    let radius_max = options.radius_max.max(radius_base);
    let easing = options.easing.clamp(0.0, 1.0);
    let seed = |offset: u32, i: usize| options.seed.wrapping_add(offset).wrapping_add(i as u32);

    (0..count)
        .map(|i| {
            let angle = base_angle(i, count)
                + hash_signed(seed(options.angle_seed_offset, i)) * options.angle_jitter;
            let radius = hash_range(seed(options.radius_seed_offset, i), radius_base, radius_max);
            let height = hash_signed(seed(options.height_seed_offset, i)) * options.height_jitter;

            let r = radius * easing;
            Vec3::new(r * angle.cos(), height * easing, r * angle.sin())
        })
        .collect()
}
