use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{VaseError, VaseResult};

/// Elastic-overshoot easing on `t` in `[0, 1]`.
///
/// Matches the conventional `easeElasticOut` curve: the value shoots past
/// 1.0 and rings down onto it. Endpoints are exact: `elastic_out(0) == 0`
/// and `elastic_out(1) == 1`.
#[must_use]
pub fn elastic_out(t: f64) -> f64 {
    const C4: f64 = (2.0 * PI) / 3.0;

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    (2.0_f64).powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
}

/// Tuning for fill transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTuning {
    /// Transition length in milliseconds.
    pub duration_ms: f64,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            duration_ms: 1500.0,
        }
    }
}

impl AnimationTuning {
    pub fn validate(self) -> VaseResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(VaseError::InvalidData(
                "animation duration must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One glyph's in-flight fill interpolation.
///
/// Time never flows inside this type; callers sample it with an explicit
/// timestamp, which keeps stepping deterministic and testable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillAnimation {
    pub start_value: f64,
    pub target_value: f64,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

impl FillAnimation {
    #[must_use]
    pub const fn new(
        start_value: f64,
        target_value: f64,
        started_at_ms: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            start_value,
            target_value,
            started_at_ms,
            duration_ms,
        }
    }

    /// An already-completed animation resting at `value`.
    #[must_use]
    pub const fn settled(value: f64) -> Self {
        Self::new(value, value, 0.0, 0.0)
    }

    /// Interpolated fill value at `now_ms`.
    ///
    /// Before the start timestamp this is the start value; at or past
    /// `started_at_ms + duration_ms` it is exactly the target.
    #[must_use]
    pub fn sample(self, now_ms: f64) -> f64 {
        let elapsed = now_ms - self.started_at_ms;
        if elapsed <= 0.0 {
            return self.start_value;
        }
        if elapsed >= self.duration_ms {
            return self.target_value;
        }
        let eased = elastic_out(elapsed / self.duration_ms);
        self.start_value + (self.target_value - self.start_value) * eased
    }

    #[must_use]
    pub fn is_settled(self, now_ms: f64) -> bool {
        now_ms - self.started_at_ms >= self.duration_ms
    }

    /// Supersedes this animation with a new target.
    ///
    /// The replacement starts from the value currently on screen, so an
    /// in-flight transition is retargeted mid-curve rather than snapped.
    #[must_use]
    pub fn retargeted(self, target_value: f64, now_ms: f64, duration_ms: f64) -> Self {
        Self::new(self.sample(now_ms), target_value, now_ms, duration_ms)
    }
}

/// One optional animation slot per glyph index.
///
/// Animations run independently per glyph; there is no ordering guarantee
/// or completion barrier between them.
#[derive(Debug, Clone, PartialEq)]
pub struct FillAnimationSet {
    animations: Vec<FillAnimation>,
}

impl FillAnimationSet {
    /// Creates a set resting at the given fill levels (no initial motion).
    #[must_use]
    pub fn settled(fill_levels: &[f64]) -> Self {
        Self {
            animations: fill_levels
                .iter()
                .map(|level| FillAnimation::settled(*level))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Retargets every slot toward the matching fill level.
    pub fn retarget(
        &mut self,
        targets: &[f64],
        now_ms: f64,
        tuning: AnimationTuning,
    ) -> VaseResult<()> {
        if targets.len() != self.animations.len() {
            return Err(VaseError::InvalidData(format!(
                "animation retarget expects {} targets, got {}",
                self.animations.len(),
                targets.len()
            )));
        }
        for (animation, target) in self.animations.iter_mut().zip(targets) {
            *animation = animation.retargeted(*target, now_ms, tuning.duration_ms);
        }
        Ok(())
    }

    /// Current interpolated fill value per glyph index.
    #[must_use]
    pub fn sample_all(&self, now_ms: f64) -> Vec<f64> {
        self.animations
            .iter()
            .map(|animation| animation.sample(now_ms))
            .collect()
    }

    /// Whether any glyph still has a transition in flight at `now_ms`.
    #[must_use]
    pub fn any_in_flight(&self, now_ms: f64) -> bool {
        self.animations
            .iter()
            .any(|animation| !animation.is_settled(now_ms))
    }
}
