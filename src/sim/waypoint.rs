//! The player's movement target

use glam::Vec2;
use serde::Serialize;

use super::entity::Entity;
use crate::consts::WAYPOINT_ARM;
use crate::renderer::shapes::cross_segments;
use crate::renderer::{Color, Shape, ShapeId, ShapeKind, Surface};

/// Click-set target drawn as a green X while active
#[derive(Debug, Clone, Default, Serialize)]
pub struct Waypoint {
    pos: Vec2,
    active: bool,
    #[serde(skip)]
    marks: Option<[ShapeId; 2]>,
}

impl Waypoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target and make it active. Any coordinates are accepted.
    pub fn activate(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.active = true;
    }

    /// Mark inactive; the position is kept
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Entity for Waypoint {
    fn create(&mut self, surface: &mut dyn Surface) {
        let mark = Shape::new(ShapeKind::Line, Color::Green);
        self.marks = Some([surface.create_shape(mark), surface.create_shape(mark)]);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let Some(marks) = self.marks else {
            return;
        };
        if self.active {
            for (id, (a, b)) in marks.into_iter().zip(cross_segments(self.pos, WAYPOINT_ARM)) {
                surface.set_visible(id, true);
                surface.raise(id);
                surface.set_coords(id, a, b);
            }
        } else {
            for id in marks {
                surface.set_visible(id, false);
            }
        }
    }

    fn delete(&mut self, surface: &mut dyn Surface) {
        if let Some(marks) = self.marks.take() {
            for id in marks {
                surface.delete_shape(id);
            }
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }
}
