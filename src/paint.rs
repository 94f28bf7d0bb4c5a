//! Thin drawing helpers over the egui background layer. Both games draw their
//! whole screen here and do their own hit-testing, so nothing in egui ever
//! decides what a click means.

use bevy::prelude::*;
use bevy_egui::egui::{self, Align2, Color32, FontId};

use crate::hit::Region;

pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const BUTTON_GREY: Color32 = Color32::from_rgb(70, 70, 70);
pub const CORRECT_GREEN: Color32 = Color32::from_rgb(20, 120, 20);
pub const WRONG_RED: Color32 = Color32::from_rgb(160, 40, 40);

pub fn background(ctx: &egui::Context) -> egui::Painter {
    ctx.layer_painter(egui::LayerId::background())
}

pub fn fill(painter: &egui::Painter, size: Vec2, color: Color32) {
    let rect = Region::new(0.0, 0.0, size.x, size.y).to_egui_rect();
    painter.rect_filled(rect, 0.0, color);
}

pub fn button(painter: &egui::Painter, region: Region, label: &str, size: f32, bg: Color32) {
    painter.rect_filled(region.to_egui_rect(), 8.0, bg);
    let c = region.center();
    painter.text(
        egui::pos2(c.x, c.y),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(size),
        WHITE,
    );
}

pub fn text(
    painter: &egui::Painter,
    pos: Vec2,
    anchor: Align2,
    text: &str,
    size: f32,
    color: Color32,
) {
    painter.text(
        egui::pos2(pos.x, pos.y),
        anchor,
        text,
        FontId::proportional(size),
        color,
    );
}

/// Left-aligned text broken into lines no wider than `width`.
pub fn wrapped_text(
    painter: &egui::Painter,
    pos: Vec2,
    text: &str,
    size: f32,
    color: Color32,
    width: f32,
) {
    let galley = painter.layout(text.to_owned(), FontId::proportional(size), color, width);
    painter.galley(egui::pos2(pos.x, pos.y), galley, color);
}
