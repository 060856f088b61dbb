//! Single-frame hand pose classification

use crate::landmarks::{HandLandmarks, FINGERS};
use bloom_core::Vec2;
use serde::{Deserialize, Serialize};

/// Per-frame classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Open,
    Closed,
    Ambiguous,
    /// No hand in frame, or landmarks unusable
    None,
}

/// One frame's classification plus where the palm was
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub kind: GestureKind,
    pub palm: Option<Vec2>,
    pub extended_count: u8,
}

impl GestureSample {
    pub fn none() -> Self {
        Self {
            kind: GestureKind::None,
            palm: None,
            extended_count: 0,
        }
    }
}

/// Thresholds for the extended-finger test and the count → pose rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Tip-to-wrist over base-to-wrist ratio above which a finger is extended
    pub finger_ratio: f32,
    /// Same ratio for the thumb, whose base sits closer to the wrist
    pub thumb_ratio: f32,
    /// At least this many extended fingers reads as an open hand
    pub open_min_extended: u8,
    /// At most this many extended fingers reads as a closed hand
    pub closed_max_extended: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            finger_ratio: 1.5,
            thumb_ratio: 1.2,
            open_min_extended: 4,
            closed_max_extended: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    pub config: ClassifierConfig,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Extended flag per finger, thumb first
    pub fn extended_fingers(&self, hand: &HandLandmarks) -> [bool; 5] {
        let wrist = hand.wrist();
        let mut out = [false; 5];
        for (f, &(base, tip)) in FINGERS.iter().enumerate() {
            let ratio = if f == 0 {
                self.config.thumb_ratio
            } else {
                self.config.finger_ratio
            };
            let tip_distance = hand.point(tip).distance(&wrist);
            let base_distance = hand.point(base).distance(&wrist);
            out[f] = tip_distance > base_distance * ratio;
        }
        out
    }

    pub fn kind_for_count(&self, extended: u8) -> GestureKind {
        if extended >= self.config.open_min_extended {
            GestureKind::Open
        } else if extended <= self.config.closed_max_extended {
            GestureKind::Closed
        } else {
            GestureKind::Ambiguous
        }
    }

    pub fn classify(&self, hand: &HandLandmarks) -> GestureSample {
        let extended_count = self
            .extended_fingers(hand)
            .iter()
            .filter(|&&e| e)
            .count() as u8;
        GestureSample {
            kind: self.kind_for_count(extended_count),
            palm: Some(hand.palm_center()),
            extended_count,
        }
    }

    /// Classify raw inference output. `None` or unusable points classify as `None`.
    pub fn classify_frame(&self, raw: Option<&[[f32; 3]]>) -> GestureSample {
        let Some(raw) = raw else {
            return GestureSample::none();
        };
        match HandLandmarks::from_slice(raw) {
            Ok(hand) => self.classify(&hand),
            Err(e) => {
                log::debug!("dropping landmark frame: {e}");
                GestureSample::none()
            }
        }
    }
}
