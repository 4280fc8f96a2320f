// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How a programmatic seek should be applied by the host.

/// Timing curve for an animated seek.
///
/// The host owns the animation clock; this only describes the shape of the
/// motion. [`Curve::sample`] maps normalized time to normalized progress for
/// hosts that tween the offset themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Constant velocity.
    Linear,
    /// Hermite smooth step.
    SmoothStep,
    /// Cubic ease-in-out. The default curve.
    #[default]
    EaseInOut,
}

impl Curve {
    /// Progress in `0.0..=1.0` at normalized time `t` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn sample(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// Whether a scroll-target change jumps or animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Apply the new position in the same frame, without motion.
    Immediate,
    /// Animate to the new position along the given curve.
    Animated(Curve),
}

impl Transition {
    /// Returns `true` for [`Transition::Animated`].
    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Animated(_))
    }
}
