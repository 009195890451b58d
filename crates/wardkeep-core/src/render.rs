//! Draw-call vocabulary for the rendering collaborator.
//!
//! The games never talk to a graphics API. Each engine's `present`
//! module lowers a state snapshot into a [`Frame`] of shapes and text
//! labels, and the platform layer feeds frames to whatever sink it has
//! (a real canvas, a recording, or nothing at all in headless runs).

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const BROWN: Color = Color::rgb(139, 69, 19);
pub const GRAY: Color = Color::rgb(128, 128, 128);

/// A single shape to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: Position,
        radius: f32,
    },
    /// Axis-aligned rectangle, given by its center.
    Rect {
        center: Position,
        width: f32,
        height: f32,
    },
    Line {
        from: Position,
        to: Position,
    },
}

/// A filled shape with a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    pub shape: Shape,
    pub color: Color,
}

/// A text label anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub at: Position,
    pub color: Color,
}

/// Everything the renderer needs for one frame, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Background fill, if any.
    pub clear: Option<Color>,
    pub draws: Vec<DrawCall>,
    pub labels: Vec<Label>,
}

impl Frame {
    pub fn with_clear(clear: Color) -> Self {
        Self {
            clear: Some(clear),
            ..Self::default()
        }
    }

    pub fn circle(&mut self, center: Position, radius: f32, color: Color) {
        self.draws.push(DrawCall {
            shape: Shape::Circle { center, radius },
            color,
        });
    }

    pub fn rect(&mut self, center: Position, width: f32, height: f32, color: Color) {
        self.draws.push(DrawCall {
            shape: Shape::Rect {
                center,
                width,
                height,
            },
            color,
        });
    }

    pub fn line(&mut self, from: Position, to: Position, color: Color) {
        self.draws.push(DrawCall {
            shape: Shape::Line { from, to },
            color,
        });
    }

    pub fn label(&mut self, text: impl Into<String>, at: Position, color: Color) {
        self.labels.push(Label {
            text: text.into(),
            at,
            color,
        });
    }

    /// A two-tone health bar: full-width backing in `back`, a fill in
    /// `front` proportional to `ratio`, anchored above an entity.
    pub fn health_bar(&mut self, center: Position, width: f32, height: f32, ratio: f32, back: Color, front: Color) {
        self.rect(center, width, height, back);
        let fill = width * ratio.clamp(0.0, 1.0);
        // Keep the fill left-aligned with the backing bar.
        let fill_center = Position::new(center.x - (width - fill) / 2.0, center.y);
        self.rect(fill_center, fill, height, front);
    }
}

/// Opaque sink for completed frames.
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Sink that discards every frame (headless runs and tests).
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &Frame) {}
}
