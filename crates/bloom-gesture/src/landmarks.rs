//! Hand landmark storage (21-point hand model)

use bloom_core::{BloomError, Result, Vec2, Vec3};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// (base, tip) landmark pairs, thumb first
pub const FINGERS: [(usize, usize); 5] = [
    (THUMB_MCP, THUMB_TIP),
    (INDEX_MCP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_TIP),
    (RING_MCP, RING_TIP),
    (PINKY_MCP, PINKY_TIP),
];

/// The four finger bases averaged with the wrist to find the palm
const PALM_POINTS: [usize; 5] = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// One detected hand. x/y are normalized screen coordinates, z is relative depth.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build from raw inference output. Rejects short or non-finite data.
    pub fn from_slice(raw: &[[f32; 3]]) -> Result<Self> {
        if raw.len() < LANDMARK_COUNT {
            return Err(BloomError::InvalidLandmarks(format!(
                "expected {LANDMARK_COUNT} points, got {}",
                raw.len()
            )));
        }
        let mut points = [Vec3::ZERO; LANDMARK_COUNT];
        for (i, p) in raw.iter().take(LANDMARK_COUNT).enumerate() {
            let v = Vec3::from_array(*p);
            if !v.is_finite() {
                return Err(BloomError::InvalidLandmarks(format!(
                    "point {i} is not finite"
                )));
            }
            points[i] = v;
        }
        Ok(Self { points })
    }

    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    pub fn wrist(&self) -> Vec3 {
        self.points[WRIST]
    }

    /// Mean of the wrist and four finger bases, in normalized screen space
    pub fn palm_center(&self) -> Vec2 {
        let sum = PALM_POINTS
            .iter()
            .fold(Vec3::ZERO, |acc, &i| acc + self.points[i]);
        let mean = sum * (1.0 / PALM_POINTS.len() as f32);
        Vec2::new(mean.x, mean.y).clamp_unit()
    }

    /// A schematic upright hand, wrist at `wrist`, each finger extended or curled.
    ///
    /// Extended tips sit at three times (thumb: five times) their base distance
    /// from the wrist; curled tips at 1.05 times.
    pub fn synthetic(extended: [bool; 5], wrist: Vec2) -> Self {
        // Fan of finger directions in degrees from straight up; screen y grows downward.
        const FAN: [f32; 5] = [-60.0, -20.0, -5.0, 10.0, 25.0];
        const BASE_DIST: [f32; 5] = [0.06, 0.1, 0.1, 0.1, 0.1];
        const EXTENDED_DIST: f32 = 0.3;
        const CURLED_RATIO: f32 = 1.05;

        let origin = Vec3::new(wrist.x, wrist.y, 0.0);
        let mut points = [origin; LANDMARK_COUNT];

        for (f, &(base, tip)) in FINGERS.iter().enumerate() {
            let a = FAN[f].to_radians();
            let dir = Vec3::new(a.sin(), -a.cos(), 0.0);
            let tip_dist = if extended[f] {
                EXTENDED_DIST
            } else {
                BASE_DIST[f] * CURLED_RATIO
            };
            // Joints between base and tip are laid on the same ray
            for j in base..=tip {
                let t = (j - base) as f32 / (tip - base) as f32;
                let d = BASE_DIST[f] + (tip_dist - BASE_DIST[f]) * t;
                points[j] = origin + dir * d;
            }
        }
        points[THUMB_CMC] = origin + (points[THUMB_MCP] - origin) * 0.5;

        Self { points }
    }
}
