//! The goal region

use glam::Vec2;
use serde::Serialize;

use super::collision::square_contains;
use super::entity::Entity;
use crate::renderer::shapes::square_corners;
use crate::renderer::{Color, Shape, ShapeId, ShapeKind, Surface};

/// Square goal the player must reach.
///
/// The position is set by the controller at start and rewritten by Thief
/// enemies while they carry it; the last writer in update order wins.
#[derive(Debug, Clone, Serialize)]
pub struct Home {
    pub pos: Vec2,
    pub size: f32,
    #[serde(skip)]
    outline: Option<ShapeId>,
}

impl Home {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            outline: None,
        }
    }

    /// Check whether the point lies within home, edges included
    pub fn contains(&self, x: f32, y: f32) -> bool {
        square_contains(self.pos, self.size, Vec2::new(x, y))
    }
}

impl Entity for Home {
    fn create(&mut self, surface: &mut dyn Surface) {
        self.outline = Some(surface.create_shape(Shape::new(ShapeKind::Outline, Color::Brown)));
    }

    fn render(&self, surface: &mut dyn Surface) {
        if let Some(id) = self.outline {
            let (a, b) = square_corners(self.pos, self.size);
            surface.set_coords(id, a, b);
        }
    }

    fn delete(&mut self, surface: &mut dyn Surface) {
        if let Some(id) = self.outline.take() {
            surface.delete_shape(id);
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    #[test]
    fn test_contains_inclusive_square() {
        let home = Home::new(Vec2::new(700.0, 300.0), 20.0);
        assert!(home.contains(700.0, 300.0));
        assert!(home.contains(690.0, 310.0));
        assert!(home.contains(710.0, 290.0));
        assert!(!home.contains(689.9, 300.0));
        assert!(!home.contains(700.0, 310.1));
    }

    #[test]
    fn test_render_outline() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut home = Home::new(Vec2::new(700.0, 300.0), 20.0);
        home.create(&mut surface);
        home.render(&mut surface);

        let item = surface.item(home.outline.unwrap()).unwrap();
        assert_eq!(item.a, Vec2::new(690.0, 290.0));
        assert_eq!(item.b, Vec2::new(710.0, 310.0));
    }
}
