//! Per-control color tables
//!
//! Each table has a palette-derived `Default`, structural equality, and an
//! `*Override` companion whose set slots replace the table's on
//! `with_overrides`.

mod button;
mod checkbox;
mod radio;
mod switch;
mod text_field;

pub use button::*;
pub use checkbox::*;
pub use radio::*;
pub use switch::*;
pub use text_field::*;
