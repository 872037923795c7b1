// input.rs
// Per-frame input vector. The windowing shim fills one of these from the
// device state each frame; the core never touches the window library.

use ultraviolet::Vec2;

/// Snapshot of everything the viewer reacts to in one frame.
///
/// `step_back` / `step_forward` / `reset` are edge-triggered: true only on
/// the frame the key went down, so holding a key fires a single step.
/// `pause_held` and `pointer_held` are level-triggered.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputFrame {
    /// Pointer position in screen pixels.
    pub pointer_pos: Vec2,
    /// Left button held (drives the drag-pan gesture).
    pub pointer_held: bool,
    pub scroll_up: bool,
    pub scroll_down: bool,
    /// Arrow-key pan direction, one unit per held axis.
    pub pan: Vec2,
    pub pause_held: bool,
    pub step_back: bool,
    pub step_forward: bool,
    pub reset: bool,
    pub quit: bool,
}
