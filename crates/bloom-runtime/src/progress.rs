//! Frame-rate independent smoothing of a layer's progress toward its mode

use crate::mode::Mode;
use bloom_core::smoothstep;

/// One exponential-smoothing step toward `target`.
///
/// `progress + (target - progress) * (1 - e^(-rate*dt))`. Negative `rate` or
/// `dt` is treated as zero, so the result never overshoots `target` and stays
/// in [0, 1] whenever `progress` and `target` do.
pub fn step_progress(progress: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let k = 1.0 - (-rate.max(0.0) * dt.max(0.0)).exp();
    (progress + (target - progress) * k).clamp(0.0, 1.0)
}

/// Per-layer progress state. Owned by exactly one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressInterpolator {
    progress: f32,
    /// Smoothing speed in 1/seconds; 3.0 covers 95% of the distance in one second
    pub rate: f32,
}

impl ProgressInterpolator {
    pub fn new(rate: f32) -> Self {
        Self {
            progress: 0.0,
            rate,
        }
    }

    /// Start already settled on `mode`
    pub fn settled(rate: f32, mode: Mode) -> Self {
        Self {
            progress: mode.target_value(),
            rate,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advance one frame toward `mode`, returning the new progress
    pub fn step(&mut self, dt: f32, mode: Mode) -> f32 {
        self.progress = step_progress(self.progress, mode.target_value(), self.rate, dt);
        self.progress
    }

    /// Smoothstep-eased progress, for material parameters
    pub fn eased(&self) -> f32 {
        smoothstep(self.progress)
    }
}

impl Default for ProgressInterpolator {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_formed_without_overshoot() {
        let mut p = ProgressInterpolator::new(3.0);
        let dt = 1.0 / 60.0;
        let mut last = p.progress();
        for _ in 0..600 {
            let v = p.step(dt, Mode::Formed);
            assert!((0.0..=1.0).contains(&v));
            assert!(v >= last);
            last = v;
        }
        assert!((p.progress() - 1.0).abs() < 0.01);
    }

    #[test]
    fn converges_back_to_chaos() {
        let mut p = ProgressInterpolator::settled(3.0, Mode::Formed);
        for _ in 0..600 {
            let v = p.step(1.0 / 60.0, Mode::Chaos);
            assert!((0.0..=1.0).contains(&v));
        }
        assert!(p.progress() < 0.01);
    }

    #[test]
    fn frame_rate_independent() {
        let mut fast = ProgressInterpolator::new(2.0);
        let mut slow = ProgressInterpolator::new(2.0);
        for _ in 0..120 {
            fast.step(1.0 / 120.0, Mode::Formed);
        }
        for _ in 0..30 {
            slow.step(1.0 / 30.0, Mode::Formed);
        }
        assert!((fast.progress() - slow.progress()).abs() < 1e-4);
    }

    #[test]
    fn huge_step_lands_on_target() {
        let mut p = ProgressInterpolator::new(3.0);
        p.step(1.0e6, Mode::Formed);
        assert_eq!(p.progress(), 1.0);
    }

    #[test]
    fn negative_inputs_do_not_move() {
        assert_eq!(step_progress(0.3, 1.0, -5.0, 0.1), 0.3);
        assert_eq!(step_progress(0.3, 1.0, 5.0, -0.1), 0.3);
    }

    #[test]
    fn rate_three_reaches_95_percent_in_a_second() {
        let mut p = ProgressInterpolator::new(3.0);
        for _ in 0..60 {
            p.step(1.0 / 60.0, Mode::Formed);
        }
        assert!(p.progress() > 0.94);
    }

    #[test]
    fn eased_follows_shared_smoothstep() {
        let mut p = ProgressInterpolator::new(2.0);
        for _ in 0..30 {
            p.step(1.0 / 60.0, Mode::Formed);
            assert_eq!(p.eased(), smoothstep(p.progress()));
            assert!((0.0..=1.0).contains(&p.eased()));
        }
    }

    #[test]
    fn eased_endpoints() {
        assert_eq!(ProgressInterpolator::new(1.0).eased(), 0.0);
        assert_eq!(ProgressInterpolator::settled(1.0, Mode::Formed).eased(), 1.0);
    }
}
