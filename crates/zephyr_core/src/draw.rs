//! Abstract draw commands
//!
//! Controls never touch pixels. Each frame they produce an ordered
//! [`DrawList`] that the host compositor replays in order: later commands
//! paint over earlier ones, and every `PushScale` is balanced by a
//! `PopTransform`.

use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::{CornerRadius, Point, Rect};

/// Glyphs the host is expected to provide as vector assets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Checkmark,
}

/// Horizontal alignment of a text run inside its bounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

/// A single drawing primitive
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRoundRect {
        rect: Rect,
        radius: CornerRadius,
        color: Color,
    },
    StrokeRoundRect {
        rect: Rect,
        radius: CornerRadius,
        width: f32,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        color: Color,
    },
    /// Single-line text, vertically centered in `bounds`
    Text {
        bounds: Rect,
        text: String,
        color: Color,
        align: TextAlign,
    },
    Icon {
        kind: IconKind,
        bounds: Rect,
        tint: Color,
        alpha: f32,
    },
    /// Scale everything until the matching `PopTransform` around `pivot`
    PushScale { scale: f32, pivot: Point },
    PopTransform,
}

/// Ordered draw commands for one control
///
/// Most controls emit two to four commands, so the list stays inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: SmallVec<[DrawCommand; 4]>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn fill_round_rect(&mut self, rect: Rect, radius: impl Into<CornerRadius>, color: Color) {
        self.push(DrawCommand::FillRoundRect {
            rect,
            radius: radius.into(),
            color,
        });
    }

    pub fn stroke_round_rect(
        &mut self,
        rect: Rect,
        radius: impl Into<CornerRadius>,
        width: f32,
        color: Color,
    ) {
        self.push(DrawCommand::StrokeRoundRect {
            rect,
            radius: radius.into(),
            width,
            color,
        });
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        self.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    pub fn text(&mut self, bounds: Rect, text: impl Into<String>, color: Color, align: TextAlign) {
        self.push(DrawCommand::Text {
            bounds,
            text: text.into(),
            color,
            align,
        });
    }

    pub fn icon(&mut self, kind: IconKind, bounds: Rect, tint: Color, alpha: f32) {
        self.push(DrawCommand::Icon {
            kind,
            bounds,
            tint,
            alpha,
        });
    }

    /// Run `f` with a scale transform applied around `pivot`
    ///
    /// An identity scale emits no transform commands.
    pub fn scaled(&mut self, scale: f32, pivot: Point, f: impl FnOnce(&mut DrawList)) {
        let identity = (scale - 1.0).abs() < f32::EPSILON;
        if !identity {
            self.push(DrawCommand::PushScale { scale, pivot });
        }
        f(self);
        if !identity {
            self.push(DrawCommand::PopTransform);
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
