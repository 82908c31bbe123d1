//! Fixed-duration tweens and easing curves
//!
//! Drives the fading "+10" labels and the game-over score count-up.

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out (a.k.a. Power1)
    QuadOut,
    /// Cubic ease-out
    CubicOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => ease_out_quad(t),
            Easing::CubicOut => ease_out_cubic(t),
        }
    }
}

#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

const FINISH_EPSILON: f32 = 1e-4;

/// A timer that maps elapsed time onto an eased 0..1 value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub elapsed: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        // Absorb float drift from summing fixed timesteps
        if self.duration - self.elapsed < FINISH_EPSILON {
            self.elapsed = self.duration;
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Eased progress in [0, 1]
    pub fn value(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::QuadOut, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_front_loads() {
        // Ease-out curves cover more than half the distance by the midpoint
        assert!(ease_out_quad(0.5) > 0.5);
        assert!(ease_out_cubic(0.5) > ease_out_quad(0.5));
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_tween_finishes() {
        let mut tween = Tween::new(1.0, Easing::QuadOut);
        assert!(!tween.is_finished());
        for _ in 0..60 {
            tween.advance(1.0 / 120.0);
        }
        assert!((tween.progress() - 0.5).abs() < 1e-4);
        for _ in 0..100 {
            tween.advance(1.0 / 120.0);
        }
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_is_done() {
        let tween = Tween::new(0.0, Easing::CubicOut);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 1.0);
    }
}
