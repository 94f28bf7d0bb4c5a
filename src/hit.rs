use bevy::prelude::*;
use bevy_egui::egui;

/// Axis-aligned clickable area in window logical coordinates
/// (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub min: Vec2,
    pub size: Vec2,
}

impl Region {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Open-interval test: a point lying exactly on an edge is outside.
    pub fn contains(&self, p: Vec2) -> bool {
        (p.x > self.min.x)
            && (p.x < self.min.x + self.size.x)
            && (p.y > self.min.y)
            && (p.y < self.min.y + self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn to_egui_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.min.x, self.min.y),
            egui::vec2(self.size.x, self.size.y),
        )
    }
}
