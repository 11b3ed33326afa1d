//! Scroll animation controller.
//!
//! Holds at most one active animation toward a target offset. `scroll_to`
//! starts or retargets it, `update` advances it once per frame and returns
//! the interpolated offset.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Animated scroll position for one scrolling context
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once any active animation completes
    pub fn target(&self) -> f64 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    /// Current interpolated offset
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump to an offset immediately, cancelling any animation
    pub fn set_scroll(&mut self, offset: f64, max_scroll: f64) {
        self.animation = None;
        self.current = offset.clamp(0.0, max_scroll);
    }

    /// Animate toward a target offset.
    ///
    /// With smooth scrolling disabled this jumps immediately. Retargeting
    /// while animating restarts from the current visible offset.
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64) {
        let target = target.clamp(0.0, max_scroll);

        if !self.config.is_smooth() {
            self.current = target;
            self.animation = None;
            return;
        }

        let from = self.current;
        if (from - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self, max_scroll: f64) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased = anim.easing.apply(t);
                self.current = lerp(anim.from, anim.to, eased).min(max_scroll);
            }
        }
        self.current
    }

    /// Cancel any active animation and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}
