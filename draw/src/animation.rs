//! Spin animation as an explicit finite-state timer.
//!
//! `Idle -> Animating -> Settled`, driven by a host calling
//! [`SpinAnimation::advance`] once per display frame with a monotonic
//! timestamp. The first frame after a spin starts fixes the start time, so a
//! spin request and its first frame need not share a clock reading.
//!
//! Angles are wheel-space radians. The wheel turns towards negative angles;
//! the pointer sits at wheel angle 0.

use core::f64::consts::TAU;
use core::time::Duration;

#[inline]
pub fn slice_angle(pool_len: usize) -> f64 {
    TAU / pool_len as f64
}

/// Rotation that brings slice `index` under the pointer.
#[inline]
pub fn target_angle(index: usize, pool_len: usize) -> f64 {
    -(index as f64 * slice_angle(pool_len))
}

/// Cubic ease-out: fast start, slow landing.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fold an accumulated rotation into `(-TAU, 0]`. Visually a no-op.
pub fn normalize_rotation(angle: f64) -> f64 {
    let folded = angle % TAU;
    if folded > 0.0 { folded - TAU } else { folded }
}

/// Final resting angle for a spin from `initial` that lands on `target`.
///
/// `target - m * TAU` with the smallest whole `m` that still turns the wheel
/// at least `full_rotations` times forward. From a wheel at rest at 0 this is
/// exactly `target - full_rotations * TAU`.
pub fn final_angle(initial: f64, target: f64, full_rotations: u32) -> f64 {
    let turns = (full_rotations as f64 + (target - initial) / TAU).ceil();
    target - turns * TAU
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpinPlan {
    /// Winner's index in the pool as it was when the spin started.
    pub winner_index: usize,
    pub pool_len: usize,
    pub initial_angle: f64,
    pub final_angle: f64,
    pub duration: Duration,
    started_at: Option<Duration>,
}

impl SpinPlan {
    pub fn new(
        winner_index: usize,
        pool_len: usize,
        initial_angle: f64,
        full_rotations: u32,
        duration: Duration,
    ) -> Self {
        let target = target_angle(winner_index, pool_len);
        Self {
            winner_index,
            pool_len,
            initial_angle,
            final_angle: final_angle(initial_angle, target, full_rotations),
            duration,
            started_at: None,
        }
    }

    pub fn angle_at(&self, progress: f64) -> f64 {
        self.initial_angle + ease_out_cubic(progress) * (self.final_angle - self.initial_angle)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Animating(SpinPlan),
    Settled {
        winner_index: usize,
    },
}

/// What one frame produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameStep {
    /// Nothing is animating.
    Still,
    Moving { angle: f64, progress: f64 },
    /// Last frame of a spin; `angle` is exactly the plan's final angle.
    Finished { angle: f64, winner_index: usize },
}

#[derive(Clone, Debug, Default)]
pub struct SpinAnimation {
    phase: AnimationPhase,
}

impl SpinAnimation {
    pub const fn new() -> Self {
        Self {
            phase: AnimationPhase::Idle,
        }
    }

    pub fn phase(&self) -> &AnimationPhase {
        &self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnimationPhase::Animating(_))
    }

    pub fn plan(&self) -> Option<&SpinPlan> {
        match &self.phase {
            AnimationPhase::Animating(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn start(&mut self, plan: SpinPlan) {
        self.phase = AnimationPhase::Animating(plan);
    }

    pub fn advance(&mut self, now: Duration) -> FrameStep {
        let AnimationPhase::Animating(plan) = &mut self.phase else {
            return FrameStep::Still;
        };

        let started_at = *plan.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at);
        let progress = if plan.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / plan.duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        if progress >= 1.0 {
            let step = FrameStep::Finished {
                angle: plan.final_angle,
                winner_index: plan.winner_index,
            };
            self.phase = AnimationPhase::Settled {
                winner_index: plan.winner_index,
            };
            return step;
        }

        FrameStep::Moving {
            angle: plan.angle_at(progress),
            progress,
        }
    }

    /// Drop an in-flight spin. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        if was_running {
            self.phase = AnimationPhase::Idle;
        }
        was_running
    }

    pub fn reset(&mut self) {
        self.phase = AnimationPhase::Idle;
    }
}
