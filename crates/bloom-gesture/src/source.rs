//! Boundary to the camera + landmark inference collaborator

use crate::landmarks::HandLandmarks;
use bloom_core::{BloomError, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// One completed inference cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureFrame {
    /// Raw points of the first detected hand
    Hand(Vec<[f32; 3]>),
    NoHand,
}

impl GestureFrame {
    pub fn points(&self) -> Option<&[[f32; 3]]> {
        match self {
            GestureFrame::Hand(points) => Some(points),
            GestureFrame::NoHand => None,
        }
    }
}

/// A producer of inference results.
///
/// `poll` returns `None` while inference for the next frame is still running;
/// the caller keeps the previous mode in that case.
pub trait GestureSource {
    /// Acquire the camera / model. Failure is reported, never fatal.
    fn start(&mut self) -> Result<()>;

    fn poll(&mut self) -> Option<GestureFrame>;

    /// Release whatever `start` acquired
    fn release(&mut self) {}

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureStatus {
    Active,
    Unavailable(String),
    Released,
}

impl fmt::Display for GestureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureStatus::Active => write!(f, "gesture control active"),
            GestureStatus::Unavailable(reason) => {
                write!(f, "gesture control unavailable: {reason}")
            }
            GestureStatus::Released => write!(f, "gesture control stopped"),
        }
    }
}

/// Scoped ownership of a started source. Releases it on drop.
pub struct GestureSession<S: GestureSource> {
    source: S,
    status: GestureStatus,
}

impl<S: GestureSource> GestureSession<S> {
    /// Start `source`. A failed start yields an unavailable session rather than an error.
    pub fn open(mut source: S) -> Self {
        let status = match source.start() {
            Ok(()) => {
                log::info!("gesture source '{}' started", source.name());
                GestureStatus::Active
            }
            Err(e) => {
                log::warn!("gesture source '{}' unavailable: {e}", source.name());
                GestureStatus::Unavailable(e.to_string())
            }
        };
        Self { source, status }
    }

    pub fn status(&self) -> &GestureStatus {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == GestureStatus::Active
    }

    /// Next completed frame, if the source is active and has one
    pub fn poll(&mut self) -> Option<GestureFrame> {
        if self.is_active() {
            self.source.poll()
        } else {
            None
        }
    }

    /// Release early. Dropping the session does the same.
    pub fn close(&mut self) {
        if self.is_active() {
            self.source.release();
            self.status = GestureStatus::Released;
            log::debug!("gesture source '{}' released", self.source.name());
        }
    }
}

impl<S: GestureSource> Drop for GestureSession<S> {
    fn drop(&mut self) {
        self.close();
    }
}

// ── Scripted source ──

/// Pose shorthand for scripted input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptedPose {
    Open,
    Closed,
    /// Two fingers up
    Ambiguous,
    None,
    /// Inference still running; yields no frame
    Pending,
}

/// `frames` repetitions of either a pose or explicit landmark points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub pose: Option<ScriptedPose>,
    #[serde(default)]
    pub landmarks: Option<Vec<[f32; 3]>>,
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frames() -> u32 {
    1
}

impl ScriptStep {
    pub fn pose(pose: ScriptedPose, frames: u32) -> Self {
        Self {
            pose: Some(pose),
            landmarks: None,
            frames,
        }
    }
}

/// Replays a recorded or hand-written sequence, one entry per poll.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Option<GestureFrame>>,
    start_error: Option<String>,
}

impl ScriptedSource {
    pub fn new(steps: &[ScriptStep]) -> Self {
        let mut frames = VecDeque::new();
        for step in steps {
            let frame = step_frame(step);
            for _ in 0..step.frames {
                frames.push_back(frame.clone());
            }
        }
        Self {
            frames,
            start_error: None,
        }
    }

    /// Parse a JSON array of steps
    pub fn from_json(json: &str) -> Result<Self> {
        let steps: Vec<ScriptStep> =
            serde_json::from_str(json).map_err(|e| BloomError::ParseError(e.to_string()))?;
        Ok(Self::new(&steps))
    }

    /// A source whose `start` fails with `reason`, e.g. camera permission denied
    pub fn failing(reason: &str) -> Self {
        Self {
            start_error: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

fn step_frame(step: &ScriptStep) -> Option<GestureFrame> {
    if let Some(points) = &step.landmarks {
        return Some(GestureFrame::Hand(points.clone()));
    }
    let wrist = Vec2::new(0.5, 0.8);
    let extended = match step.pose.unwrap_or(ScriptedPose::None) {
        ScriptedPose::Open => [true; 5],
        ScriptedPose::Closed => [false; 5],
        ScriptedPose::Ambiguous => [false, true, true, false, false],
        ScriptedPose::None => return Some(GestureFrame::NoHand),
        ScriptedPose::Pending => return None,
    };
    let hand = HandLandmarks::synthetic(extended, wrist);
    let points = (0..crate::landmarks::LANDMARK_COUNT)
        .map(|i| hand.point(i).to_array())
        .collect();
    Some(GestureFrame::Hand(points))
}

impl GestureSource for ScriptedSource {
    fn start(&mut self) -> Result<()> {
        match &self.start_error {
            Some(reason) => Err(BloomError::GestureUnavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn poll(&mut self) -> Option<GestureFrame> {
        self.frames.pop_front().flatten()
    }

    fn release(&mut self) {
        self.frames.clear();
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
