//! Bloom Particles - dual-position particle layouts
//!
//! Provides the positional core of a formation layer:
//! - Stateless hash and seeded xorshift randomness for reproducible layouts
//! - Chaos (scattered shell) and target (golden-spiral canopy) generators
//! - A stateless spread layout for photo cards
//! - Per-particle staggered blending and GPU instance packing

pub mod blend;
pub mod curves;
pub mod formation;
pub mod particle;
pub mod rand;
pub mod shape;
pub mod spread;

pub use blend::blend_positions;
pub use formation::{generate_particle_set, ParticleSet, GOLDEN_ANGLE};
pub use particle::{instance_bytes, pack_instances, FrameUniforms, ParticleInstance};
pub use shape::FormationShape;
pub use spread::{spread, SpreadOptions};
