//! Design tokens
//!
//! Only colors are tokenised. Sizes and timings belong to each control's
//! props.

mod color;

pub use color::*;
