//! Zephyr Core
//!
//! This crate provides the foundational primitives shared by every Zephyr control:
//!
//! - **Colors**: RGBA colors with hex/ARGB constructors and linear interpolation
//! - **Geometry**: Points, sizes, rectangles and corner radii in logical pixels
//! - **Draw Commands**: Abstract drawing primitives consumed by a host compositor
//! - **Interaction State**: Pressed/hovered/focused flags reduced from input events
//!
//! # Example
//!
//! ```rust
//! use zephyr_core::{InteractionEvent, InteractionState};
//!
//! let mut state = InteractionState::default();
//!
//! state.apply(InteractionEvent::HoverEnter);
//! state.apply(InteractionEvent::PressStart);
//! assert!(state.pressed && state.hovered);
//!
//! // Release and cancel end a press the same way
//! state.apply(InteractionEvent::PressCancel);
//! assert!(!state.pressed);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;
pub mod interaction;

pub use color::Color;
pub use draw::{DrawCommand, DrawList, IconKind, TextAlign};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use interaction::{ControlPhase, InteractionEvent, InteractionState};
