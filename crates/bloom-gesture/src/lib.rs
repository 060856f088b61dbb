//! Bloom Gesture - from hand landmarks to committed mode transitions
//!
//! - `HandLandmarks` - one frame of 21 labelled hand points
//! - `GestureClassifier` - extended-finger count → OPEN / CLOSED / AMBIGUOUS
//! - `GestureDebouncer` - run-length debouncing with hysteresis
//! - `GestureSource` / `GestureSession` - the inference collaborator boundary

pub mod classifier;
pub mod debouncer;
pub mod landmarks;
pub mod source;

pub use classifier::{ClassifierConfig, GestureClassifier, GestureKind, GestureSample};
pub use debouncer::{DebounceConfig, GestureDebouncer};
pub use landmarks::HandLandmarks;
pub use source::{
    GestureFrame, GestureSession, GestureSource, GestureStatus, ScriptStep, ScriptedPose,
    ScriptedSource,
};
