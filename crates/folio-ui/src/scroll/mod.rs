//! Smooth scrolling for in-page navigation.
//!
//! Anchor clicks and the scroll indicator request a target offset; the page
//! advances the animation once per frame and scroll-reactive components see
//! the animated movement as ordinary scroll events.
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `config` - configuration types (re-exported from folio-core)
//! - `animation` - the animation controller

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
