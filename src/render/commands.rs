// render/commands.rs
// Screen-space draw primitives handed to the presentation layer.

use ultraviolet::Vec2;

pub type Color = [u8; 4];

/// One draw call, already in screen space (camera transform applied
/// upstream). The presenter replays these in order, back to front.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle. Size components may be negative for
    /// inverted geometry; the presenter draws it mirrored.
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Filled rectangle rotated about its own `pos` (top-left) corner.
    RotatedRect {
        pos: Vec2,
        size: Vec2,
        rotation: f32,
        color: Color,
    },
    /// HUD text, unaffected by the camera.
    Text {
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// The ordered command list for one frame.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    pub fn rotated_rect(&mut self, pos: Vec2, size: Vec2, rotation: f32, color: Color) {
        self.commands.push(DrawCommand::RotatedRect {
            pos,
            size,
            rotation,
            color,
        });
    }

    pub fn text(&mut self, text: String, pos: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text { text, pos, color });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop everything pushed after `len`; used to unwind a failed pass.
    pub fn truncate(&mut self, len: usize) {
        self.commands.truncate(len);
    }
}
