//! Bloom Core - Foundational types for the Bloom formation engine
//!
//! This crate provides the types every other Bloom crate depends on:
//! - `Vec3`, `Vec2` - Spatial types
//! - `Color` - RGBA color passed through to the renderer
//! - `smoothstep` - the easing curve shared by particles and progress
//! - Error types and Result alias

mod error;
mod math;
mod types;

pub use error::{BloomError, Result};
pub use math::smoothstep;
pub use types::{Color, Vec2, Vec3};
