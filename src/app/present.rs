// app/present.rs
// The thin macroquad shim: polls device state into an InputFrame and
// replays a composed Frame as actual draw calls. Nothing else in the crate
// touches the window library.

use macroquad::prelude::{
    clear_background, draw_rectangle, draw_rectangle_ex, draw_text, is_key_down, is_key_pressed,
    is_mouse_button_down, mouse_position, mouse_wheel, vec2, Color, DrawRectangleParams, KeyCode,
    MouseButton,
};
use ultraviolet::Vec2;

use crate::config;
use crate::input::InputFrame;
use crate::render::{DrawCommand, Frame};

/// Snapshot this frame's device state.
///
/// Bindings follow the original viewer: left-drag pans, wheel zooms,
/// arrows pan, P (held) pauses, -/= step, Space rewinds, Escape quits.
pub fn poll_input() -> InputFrame {
    let (mx, my) = mouse_position();
    let (_, wheel_y) = mouse_wheel();

    let mut pan = Vec2::zero();
    if is_key_down(KeyCode::Up) {
        pan.y -= 1.0;
    }
    if is_key_down(KeyCode::Down) {
        pan.y += 1.0;
    }
    if is_key_down(KeyCode::Left) {
        pan.x -= 1.0;
    }
    if is_key_down(KeyCode::Right) {
        pan.x += 1.0;
    }

    InputFrame {
        pointer_pos: Vec2::new(mx, my),
        pointer_held: is_mouse_button_down(MouseButton::Left),
        scroll_up: wheel_y > 0.0,
        scroll_down: wheel_y < 0.0,
        pan,
        pause_held: is_key_down(KeyCode::P),
        step_back: is_key_pressed(KeyCode::Minus),
        step_forward: is_key_pressed(KeyCode::Equal),
        reset: is_key_pressed(KeyCode::Space),
        quit: is_key_down(KeyCode::Escape),
    }
}

/// Clear the background and replay the frame's command list in order.
pub fn present(frame: &Frame) {
    clear_background(to_color(config::BACKGROUND_COLOR));

    for command in &frame.commands {
        match command {
            DrawCommand::Rect { pos, size, color } => {
                draw_rectangle(pos.x, pos.y, size.x, size.y, to_color(*color));
            }
            DrawCommand::RotatedRect {
                pos,
                size,
                rotation,
                color,
            } => {
                draw_rectangle_ex(
                    pos.x,
                    pos.y,
                    size.x,
                    size.y,
                    DrawRectangleParams {
                        // Rotate about the rect's own top-left corner.
                        offset: vec2(0.0, 0.0),
                        rotation: *rotation,
                        color: to_color(*color),
                    },
                );
            }
            DrawCommand::Text { text, pos, color } => {
                draw_text(text, pos.x, pos.y, config::HUD_FONT_SIZE, to_color(*color));
            }
        }
    }
}

fn to_color(c: [u8; 4]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], c[3])
}
