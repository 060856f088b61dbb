//! Bloom Scene - wires gestures, mode, and formation layers together
//!
//! A [`Scene`] owns one shared mode, a gesture controller that may change it,
//! and the animated layers that read it once per frame.

pub mod config;
pub mod controller;
pub mod layer;
pub mod photos;
pub mod scene;

pub use config::{GestureConfig, LayerConfig, PhotoConfig, SceneConfig};
pub use controller::GestureController;
pub use layer::FormationLayer;
pub use photos::PhotoLayer;
pub use scene::{FrameOutput, LayerFrame, Scene};
