//! Formation shape parameters (parsed from TOML) and their sanitation

use bloom_core::Vec3;
use serde::{Deserialize, Serialize};

/// Parameters for one dual-position layout: the scattered chaos cloud and the
/// assembled canopy it collapses into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationShape {
    /// Seed for every stochastic draw in the layout
    pub seed: u32,

    // ── Target (assembled) layout ──
    /// Canopy radius at its widest
    pub max_radius: f32,
    /// Elevation of the canopy apex above `base_height`
    pub height: f32,
    pub base_height: f32,
    /// Radius exponent; values below 1 pull points toward the center
    pub density_exponent: f32,
    /// Number of interleaved spiral arms (1 = a single golden spiral)
    pub arm_count: u32,
    /// Extra rotation in radians per unit of radius
    pub spiral_twist: f32,
    /// Fraction of `height` lost between center and rim
    pub taper: f32,
    pub height_jitter: f32,
    pub radial_jitter: f32,

    // ── Chaos (scattered) layout ──
    pub chaos_radius_min: f32,
    pub chaos_radius_max: f32,
    /// Per-axis stretch applied after the spherical draw
    pub chaos_scale: Vec3,
    pub chaos_offset_y: f32,
    /// Minimum amount by which the chaos cloud must out-size the canopy
    pub chaos_margin: f32,
}

impl Default for FormationShape {
    fn default() -> Self {
        Self {
            seed: 1,
            max_radius: 4.5,
            height: 7.0,
            base_height: 0.5,
            density_exponent: 0.6,
            arm_count: 3,
            spiral_twist: 0.35,
            taper: 0.85,
            height_jitter: 0.6,
            radial_jitter: 0.15,
            chaos_radius_min: 10.0,
            chaos_radius_max: 22.0,
            chaos_scale: Vec3::new(1.4, 0.9, 1.4),
            chaos_offset_y: 6.0,
            chaos_margin: 2.0,
        }
    }
}

impl FormationShape {
    /// Radius of the sphere bounding the assembled canopy, measured from its center.
    pub fn target_extent(&self) -> f32 {
        let radial = self.max_radius + self.radial_jitter;
        let half_height = self.height * 0.5 + self.height_jitter;
        (radial * radial + half_height * half_height).sqrt()
    }

    /// Radius of the sphere inscribed in the chaos cloud's outer shell.
    pub fn chaos_extent(&self) -> f32 {
        self.chaos_radius_max * self.min_chaos_scale()
    }

    fn min_chaos_scale(&self) -> f32 {
        self.chaos_scale
            .x
            .min(self.chaos_scale.y)
            .min(self.chaos_scale.z)
    }

    /// Clamp caller contract violations instead of failing.
    ///
    /// Negative lengths become 0, the density exponent is kept in (0, 1], and the
    /// chaos shell is widened until it exceeds the canopy by `chaos_margin`.
    pub fn sanitized(&self) -> Self {
        let mut s = self.clone();

        for (name, value) in [
            ("max_radius", &mut s.max_radius),
            ("height", &mut s.height),
            ("height_jitter", &mut s.height_jitter),
            ("radial_jitter", &mut s.radial_jitter),
            ("chaos_radius_min", &mut s.chaos_radius_min),
            ("chaos_radius_max", &mut s.chaos_radius_max),
            ("chaos_margin", &mut s.chaos_margin),
        ] {
            if !(*value >= 0.0) {
                log::warn!("formation shape: {name} = {value} clamped to 0");
                *value = 0.0;
            }
        }

        if !(s.density_exponent > 0.0 && s.density_exponent <= 1.0) {
            let clamped = if s.density_exponent > 1.0 { 1.0 } else { 0.05 };
            log::warn!(
                "formation shape: density_exponent = {} clamped to {clamped}",
                s.density_exponent
            );
            s.density_exponent = clamped;
        }

        s.taper = s.taper.clamp(0.0, 1.0);
        s.arm_count = s.arm_count.max(1);

        for axis in [&mut s.chaos_scale.x, &mut s.chaos_scale.y, &mut s.chaos_scale.z] {
            if !(*axis > 0.0) {
                *axis = 1.0;
            }
        }

        if s.chaos_radius_min > s.chaos_radius_max {
            std::mem::swap(&mut s.chaos_radius_min, &mut s.chaos_radius_max);
        }

        let required = s.target_extent() + s.chaos_margin;
        if s.chaos_extent() < required {
            let widened = required / s.min_chaos_scale();
            log::debug!(
                "formation shape: chaos_radius_max widened {} -> {widened}",
                s.chaos_radius_max
            );
            s.chaos_radius_max = widened;
        }

        s
    }
}
