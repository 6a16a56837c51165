//! Easing functions applied to raw rail progress for rendering.
//!
//! Raw progress advances linearly with `tick`; hosts that want a curved
//! motion read the eased value instead. Label opacity always uses the raw
//! value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control point.
        c1: f32,
        /// Second inner control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Natural ease-out: CubicHermite with c1=0.33, c2=1.0.
    pub const EASE_OUT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Symmetric ease-in-out (smoothstep): CubicHermite with c1=0, c2=1.
    pub const EASE_IN_OUT: Self = Self::CubicHermite { c1: 0.0, c2: 1.0 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicHermite { c1, c2 } => {
                // c0=0 and c3=1 drop out of the Bernstein form
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::EASE_IN_OUT
    }
}

/// Named curve selectable from options files.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// No easing.
    Linear,
    /// Slow start.
    EaseIn,
    /// Fast start, gradual stop.
    EaseOut,
    /// Slow start and stop.
    #[default]
    EaseInOut,
}

impl Curve {
    /// The easing function this curve names.
    #[must_use]
    pub fn easing(self) -> EasingFunction {
        match self {
            Self::Linear => EasingFunction::Linear,
            Self::EaseIn => EasingFunction::QuadraticIn,
            Self::EaseOut => EasingFunction::EASE_OUT,
            Self::EaseInOut => EasingFunction::EASE_IN_OUT,
        }
    }
}
