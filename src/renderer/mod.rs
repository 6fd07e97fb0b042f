//! Drawing-surface contract
//!
//! The host framework owns the actual canvas. Entities talk to it through
//! [`Surface`], holding opaque [`ShapeId`] handles to the items they created.

pub mod headless;
pub mod shapes;

pub use headless::RecordingSurface;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to a drawn item, owned by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// Render colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Green,
    Brown,
    Yellow,
    Blue,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Brown => "brown",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

/// Primitive shape kinds a surface can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Segment from `a` to `b`
    Line,
    /// Rectangle outline spanning corners `a`..`b`
    Outline,
    /// Filled rectangle spanning corners `a`..`b`
    Rect,
    /// Filled oval inscribed in corners `a`..`b`
    Oval,
    /// The player's sprite, centered between `a` and `b`
    Sprite,
}

/// A shape to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
}

impl Shape {
    pub const fn new(kind: ShapeKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// The host's drawing surface
pub trait Surface {
    /// Surface width in surface units
    fn width(&self) -> f32;
    /// Surface height in surface units
    fn height(&self) -> f32;
    /// Allocate a new item (initially placed at the origin, visible)
    fn create_shape(&mut self, shape: Shape) -> ShapeId;
    /// Move an item to the two control points `a` and `b`
    fn set_coords(&mut self, id: ShapeId, a: Vec2, b: Vec2);
    /// Show or hide an item
    fn set_visible(&mut self, id: ShapeId, visible: bool);
    /// Bring an item to the top of the drawing order
    fn raise(&mut self, id: ShapeId);
    /// Release an item
    fn delete_shape(&mut self, id: ShapeId);
    /// Draw text centered at `center`
    fn draw_text(&mut self, center: Vec2, text: &str, color: Color) -> ShapeId;

    /// Surface extent as a vector
    fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}
