//! In-memory drawing surface
//!
//! Records every item and its latest placement instead of rasterizing.
//! Used by the headless driver and by tests to observe what was drawn.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::Serialize;

use super::{Color, Shape, ShapeId, Surface};

/// A recorded shape
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub shape: Shape,
    pub a: Vec2,
    pub b: Vec2,
    pub visible: bool,
}

/// A recorded text item
#[derive(Debug, Clone, Serialize)]
pub struct TextItem {
    pub id: ShapeId,
    pub center: Vec2,
    pub text: String,
    pub color: Color,
}

/// Surface that keeps its contents in memory
#[derive(Debug, Clone, Serialize)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    items: BTreeMap<ShapeId, Item>,
    texts: Vec<TextItem>,
    /// Drawing order, bottom first
    stacking: Vec<ShapeId>,
    next_id: u32,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            items: BTreeMap::new(),
            texts: Vec::new(),
            stacking: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.stacking.push(id);
        id
    }

    /// Look up a live shape
    pub fn item(&self, id: ShapeId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Number of live shapes (text excluded)
    pub fn shape_count(&self) -> usize {
        self.items.len()
    }

    /// Every text item drawn so far
    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    /// Topmost live item
    pub fn topmost(&self) -> Option<ShapeId> {
        self.stacking.last().copied()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn create_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.allocate();
        self.items.insert(
            id,
            Item {
                shape,
                a: Vec2::ZERO,
                b: Vec2::ZERO,
                visible: true,
            },
        );
        id
    }

    fn set_coords(&mut self, id: ShapeId, a: Vec2, b: Vec2) {
        if let Some(item) = self.items.get_mut(&id) {
            item.a = a;
            item.b = b;
        }
    }

    fn set_visible(&mut self, id: ShapeId, visible: bool) {
        if let Some(item) = self.items.get_mut(&id) {
            item.visible = visible;
        }
    }

    fn raise(&mut self, id: ShapeId) {
        if let Some(pos) = self.stacking.iter().position(|&s| s == id) {
            self.stacking.remove(pos);
            self.stacking.push(id);
        }
    }

    fn delete_shape(&mut self, id: ShapeId) {
        self.items.remove(&id);
        self.texts.retain(|t| t.id != id);
        self.stacking.retain(|&s| s != id);
    }

    fn draw_text(&mut self, center: Vec2, text: &str, color: Color) -> ShapeId {
        let id = self.allocate();
        self.texts.push(TextItem {
            id,
            center,
            text: text.to_string(),
            color,
        });
        id
    }
}
