// camera.rs
// Pan/zoom transform from simulation space to screen space, plus the
// scroll/drag gesture handling that mutates it.

use ultraviolet::Vec2;

use crate::config;
use crate::input::InputFrame;

/// Pointer-driven panning gesture state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last: Vec2 },
}

/// The single world-to-screen mapping every draw goes through:
/// `screen = world * zoom + offset`.
///
/// Zoom is clamped to `[ZOOM_MIN, ZOOM_MAX]` step by step; the lower bound
/// is negative, and a negative zoom mirrors the scene about the offset
/// point. That matches the recorded viewer behavior and is kept as-is.
#[derive(Clone, Debug)]
pub struct Camera {
    pub zoom: f32,
    pub offset: Vec2,
    drag: DragState,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            zoom: config::INITIAL_ZOOM,
            offset: Vec2::zero(),
            drag: DragState::Idle,
        }
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        p * self.zoom + self.offset
    }

    /// Inverse transform; meaningless at zoom 0 (callers never need it
    /// there, the viewer only converts pointer positions).
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.zoom
    }

    /// Apply one frame's worth of gestures: scroll zoom, drag pan, and
    /// arrow-key pan.
    pub fn handle_input(&mut self, input: &InputFrame) {
        if input.scroll_up && self.zoom <= config::ZOOM_MAX {
            self.zoom += config::ZOOM_STEP;
        }
        if input.scroll_down && self.zoom >= config::ZOOM_MIN {
            self.zoom -= config::ZOOM_STEP;
        }

        self.offset += input.pan * config::KEY_PAN_STEP;

        // Drag: incremental deltas against the last recorded point, so the
        // accumulated offset equals the pointer's net travel.
        match self.drag {
            DragState::Idle => {
                if input.pointer_held {
                    self.drag = DragState::Dragging {
                        last: input.pointer_pos,
                    };
                }
            }
            DragState::Dragging { last } => {
                if input.pointer_held {
                    self.offset += input.pointer_pos - last;
                    self.drag = DragState::Dragging {
                        last: input.pointer_pos,
                    };
                } else {
                    self.drag = DragState::Idle;
                }
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame() -> InputFrame {
        InputFrame::default()
    }

    #[test]
    fn transform_is_zoom_then_offset() {
        let mut cam = Camera::new();
        cam.zoom = 2.0;
        cam.offset = Vec2::new(10.0, -5.0);
        assert_eq!(cam.world_to_screen(Vec2::new(3.0, 4.0)), Vec2::new(16.0, 3.0));
    }

    #[test]
    fn transform_round_trips_for_nonzero_zoom() {
        let mut cam = Camera::new();
        cam.zoom = -2.5;
        cam.offset = Vec2::new(37.0, 11.0);
        let p = Vec2::new(123.456, -78.9);
        let back = cam.world_to_screen(cam.screen_to_world(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
    }

    #[test]
    fn five_scroll_ups_from_default() {
        let mut cam = Camera::new();
        let mut input = frame();
        input.scroll_up = true;
        for _ in 0..5 {
            cam.handle_input(&input);
        }
        assert_relative_eq!(cam.zoom, 3.5, epsilon = 1e-5);
    }

    #[test]
    fn zoom_stops_increasing_past_upper_bound() {
        let mut cam = Camera::new();
        cam.zoom = 9.95;
        let mut input = frame();
        input.scroll_up = true;
        for _ in 0..50 {
            cam.handle_input(&input);
        }
        // One step may land past the bound; after that the guard holds.
        assert!(cam.zoom <= config::ZOOM_MAX + config::ZOOM_STEP + 1e-5);
    }

    #[test]
    fn zoom_may_go_negative_down_to_lower_bound() {
        let mut cam = Camera::new();
        let mut input = frame();
        input.scroll_down = true;
        for _ in 0..200 {
            cam.handle_input(&input);
        }
        assert!(cam.zoom < 0.0);
        assert!(cam.zoom >= config::ZOOM_MIN - config::ZOOM_STEP - 1e-3);
    }

    #[test]
    fn drag_accumulates_net_pointer_travel() {
        let mut cam = Camera::new();

        let mut input = frame();
        input.pointer_held = true;
        input.pointer_pos = Vec2::new(100.0, 100.0);
        cam.handle_input(&input); // press: records, no movement yet
        assert_eq!(cam.offset, Vec2::zero());

        input.pointer_pos = Vec2::new(110.0, 95.0);
        cam.handle_input(&input);
        input.pointer_pos = Vec2::new(120.0, 90.0);
        cam.handle_input(&input);

        assert!((cam.offset.x - 20.0).abs() < 1e-5);
        assert!((cam.offset.y + 10.0).abs() < 1e-5);

        input.pointer_held = false;
        cam.handle_input(&input);
        assert!(!cam.is_dragging());

        // Moving the released pointer changes nothing.
        input.pointer_pos = Vec2::new(500.0, 500.0);
        cam.handle_input(&input);
        assert!((cam.offset.x - 20.0).abs() < 1e-5);
    }

    #[test]
    fn arrow_keys_pan_one_step_per_frame() {
        let mut cam = Camera::new();
        let mut input = frame();
        input.pan = Vec2::new(1.0, -1.0);
        cam.handle_input(&input);
        cam.handle_input(&input);
        assert_eq!(cam.offset, Vec2::new(2.0, -2.0));
    }
}
