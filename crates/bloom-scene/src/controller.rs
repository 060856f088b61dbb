//! Gesture pipeline: classify a frame, debounce, report commits

use crate::config::GestureConfig;
use bloom_gesture::{GestureClassifier, GestureDebouncer, GestureFrame, GestureSample};
use bloom_runtime::Mode;

/// Classifier plus debouncer, fed one completed inference frame at a time.
#[derive(Debug, Clone)]
pub struct GestureController {
    classifier: GestureClassifier,
    debouncer: GestureDebouncer,
    last_sample: GestureSample,
}

impl GestureController {
    pub fn new(config: &GestureConfig, initial: Mode) -> Self {
        Self {
            classifier: GestureClassifier::new(config.classifier.clone()),
            debouncer: GestureDebouncer::new(config.debounce.clone(), initial),
            last_sample: GestureSample::none(),
        }
    }

    /// Process one frame. Returns the mode to commit, if any.
    pub fn push(&mut self, frame: &GestureFrame) -> Option<Mode> {
        let sample = self.classifier.classify_frame(frame.points());
        self.last_sample = sample;
        self.debouncer.update(sample.kind)
    }

    /// Keep the debouncer in step with a mode set elsewhere
    pub fn sync_external(&mut self, mode: Mode) {
        self.debouncer.sync_external(mode);
    }

    pub fn last_sample(&self) -> GestureSample {
        self.last_sample
    }
}
