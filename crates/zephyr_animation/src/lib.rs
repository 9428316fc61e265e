//! Zephyr Animation System
//!
//! Time-based transitions for control visuals.
//!
//! # Features
//!
//! - **Easing Curves**: CSS-style cubic beziers, including the standard
//!   material curves (`FastOutSlowIn`, `LinearOutSlowIn`, ...)
//! - **Animated Values**: Retargetable tweens over `f32` and `Color`
//! - **Interruptible**: Retargeting starts from the current rendered value,
//!   never from the previous target
//! - **Frame Clock**: Turns host frame timestamps into tick deltas
//!
//! # Example
//!
//! ```rust
//! use zephyr_animation::{AnimatedValue, AnimationSpec, Easing};
//!
//! let mut alpha = AnimatedValue::new(0.0_f32, AnimationSpec::tween(200, Easing::EaseOut));
//! alpha.update(1.0);
//!
//! alpha.tick(100.0);
//! assert!(alpha.value() > 0.0 && alpha.value() < 1.0);
//!
//! alpha.tick(100.0);
//! assert_eq!(alpha.value(), 1.0);
//! assert!(alpha.is_settled());
//! ```

pub mod animated;
pub mod clock;
pub mod easing;
pub mod values;

pub use animated::{AnimatedValue, AnimationSpec};
pub use clock::FrameClock;
pub use easing::Easing;
pub use values::Interpolate;
