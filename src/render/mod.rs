// render/mod.rs
// Frame compositor: runs the draw passes in fixed back-to-front order and
// isolates faults per overlay category, so one bad dataset never blanks
// the rest of the frame.

pub mod commands;
pub mod draw;


pub use commands::{Color, DrawCommand, Frame};

use crate::camera::Camera;
use crate::scene::{IterationIndex, Scene};

#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    #[error("non-finite geometry")]
    NonFinite,
}

/// Overlay categories, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCategory {
    Areas,
    Obstacles,
    Agents,
    Trails,
}

impl DrawCategory {
    const ALL: [DrawCategory; 4] = [
        DrawCategory::Areas,
        DrawCategory::Obstacles,
        DrawCategory::Agents,
        DrawCategory::Trails,
    ];

    fn name(self) -> &'static str {
        match self {
            DrawCategory::Areas => "areas",
            DrawCategory::Obstacles => "obstacles",
            DrawCategory::Agents => "agents",
            DrawCategory::Trails => "trails",
        }
    }
}

/// Composes one frame per tick. A category whose pass fails is logged and
/// disabled for the remainder of the run; its partial output is unwound
/// from the frame and every other category keeps drawing.
pub struct SceneRenderer {
    disabled: [bool; 4],
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            disabled: [false; 4],
        }
    }

    pub fn is_disabled(&self, category: DrawCategory) -> bool {
        self.disabled[category as usize]
    }

    fn disable(&mut self, category: DrawCategory, err: DrawError) {
        log::warn!(
            "draw pass '{}' failed ({}); category disabled for this run",
            category.name(),
            err
        );
        self.disabled[category as usize] = true;
    }

    /// Build the command list for the iteration at `cursor`. Order, back to
    /// front: areas, obstacles, agents, trails, HUD. The presenter clears
    /// the background before replaying the frame.
    pub fn compose(
        &mut self,
        scene: &Scene,
        index: &IterationIndex,
        camera: &Camera,
        cursor: usize,
    ) -> Frame {
        let mut frame = Frame::new();
        let iteration = &scene.iterations[cursor];
        let prev_number = cursor
            .checked_sub(1)
            .map(|prev| scene.iterations[prev].number);

        for category in DrawCategory::ALL {
            if self.is_disabled(category) {
                continue;
            }
            let mark = frame.len();
            let result = match category {
                DrawCategory::Areas => draw::areas(&mut frame, &scene.areas, camera),
                DrawCategory::Obstacles => draw::obstacles(&mut frame, &scene.obstacles, camera),
                DrawCategory::Agents => draw::agents(&mut frame, iteration, camera),
                DrawCategory::Trails => {
                    draw::trails(&mut frame, iteration, prev_number, index, camera)
                }
            };
            if let Err(err) = result {
                frame.truncate(mark);
                self.disable(category, err);
            }
        }

        draw::hud(&mut frame, camera.zoom, iteration.number);
        frame
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}
