//! GPU instance data for the renderer

use crate::formation::ParticleSet;
use bloom_core::Color;
use bytemuck::{Pod, Zeroable};

/// Per-particle instance record, matches the renderer's `FormationInstance`.
/// 48 bytes, 3 rows of vec4.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    pub pos_size: [f32; 4], // xyz = blended position, w = size
    pub color: [f32; 4],    // rgba
    pub anim: [f32; 4],     // x = random factor, y = layer progress, zw unused
}

/// Per-frame uniforms shared by every formation layer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct FrameUniforms {
    pub elapsed: f32,
    pub delta: f32,
    pub progress: f32,
    pub mode: f32, // 0 = chaos, 1 = formed
}

/// Pack blended positions into `out`, replacing its contents.
///
/// Particle size varies by up to `size_variance` of `size`, keyed on the random factor.
pub fn pack_instances(
    set: &ParticleSet,
    positions: &[f32],
    size: f32,
    size_variance: f32,
    color: Color,
    progress: f32,
    out: &mut Vec<ParticleInstance>,
) {
    out.clear();
    let count = set.len().min(positions.len() / 3);
    out.reserve(count);
    let rgba = color.to_array();

    for (i, &rf) in set.random_factors().iter().take(count).enumerate() {
        let base = i * 3;
        let s = size * (1.0 - size_variance.clamp(0.0, 1.0) * rf);
        out.push(ParticleInstance {
            pos_size: [positions[base], positions[base + 1], positions[base + 2], s],
            color: rgba,
            anim: [rf, progress, 0.0, 0.0],
        });
    }
}

/// Byte view of an instance slice for buffer upload
pub fn instance_bytes(instances: &[ParticleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
