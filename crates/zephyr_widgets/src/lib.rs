//! Zephyr Controls
//!
//! Five interactive controls sharing one model:
//!
//! 1. Caller-owned props (`checked`, `value`, `enabled`, colors, ...)
//! 2. Control-owned interaction state from host [`InteractionEvent`]s
//! 3. A pure `resolve(props, interaction)` per control giving target visuals
//! 4. One [`AnimatedValue`](zephyr_animation::AnimatedValue) per visual slot
//! 5. A [`DrawList`] built from the rendered values
//!
//! Controls never change their own props. User intent is reported through
//! callbacks, and the caller pushes updated props back with `set_props`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use zephyr_widgets::{InteractionEvent, Switch, SwitchProps};
//!
//! let requested = Arc::new(Mutex::new(None));
//! let sink = requested.clone();
//! let mut switch = Switch::new(SwitchProps::new(false))
//!     .on_checked_change(move |checked| *sink.lock().unwrap() = Some(checked));
//!
//! switch.handle_event(InteractionEvent::PressStart);
//! switch.handle_event(InteractionEvent::PressEnd);
//!
//! let checked = requested.lock().unwrap().take().unwrap();
//! switch.set_checked(checked);
//! while switch.tick(16.0) {}
//! assert_eq!(switch.rendered().position, 1.0);
//! ```

#[macro_use]
pub mod control;

pub mod button;
pub mod checkbox;
pub mod radio;
pub mod registry;
pub mod switch;
pub mod text_field;

pub use button::{Button, ButtonProps, ButtonVisual};
pub use checkbox::{Checkbox, CheckboxProps, CheckboxVisual};
pub use control::{Control, ControlKind};
pub use radio::{RadioButton, RadioProps, RadioVisual};
pub use registry::{ControlId, ControlRegistry};
pub use switch::{Switch, SwitchProps, SwitchVisual};
pub use text_field::{TextField, TextFieldProps, TextFieldVisual};

pub use zephyr_core::{
    ControlPhase, DrawCommand, DrawList, InteractionEvent, InteractionState, Rect,
};
