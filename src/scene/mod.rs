// scene/mod.rs
// Value types for a loaded replay: agents, iterations, and static overlays.
// Everything here is immutable once the loader hands it over.

pub mod index;

pub use index::IterationIndex;

use ultraviolet::Vec2;

#[cfg(test)]
mod tests;

/// One tracked entity's recorded position at one instant.
///
/// Ids are unique within an iteration and stable across iterations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Agent {
    pub id: i64,
    pub pos: Vec2,
    /// Deletion flag carried by some recordings; kept for inspection, the
    /// viewer draws flagged agents like any other.
    pub is_deleted: bool,
}

impl Agent {
    pub fn new(id: i64, x: f32, y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            is_deleted: false,
        }
    }
}

/// One discrete time step of the recording: every live agent's position.
///
/// `number` is the recorded iteration number; the loader guarantees the
/// list of iterations is sorted by it with no duplicates.
#[derive(Clone, Debug)]
pub struct Iteration {
    pub number: u32,
    pub agents: Vec<Agent>,
}

/// An open polyline; consecutive points define the drawn edges.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub points: Vec<Vec2>,
}

/// Rectangular overlay with an inset "hole": an outer rectangle, an inner
/// cut-out shrunk by the indents, and a border drawn on the outer edge.
///
/// Indents larger than half the extent invert the inner rectangle; that is
/// rendered as-is (the fill rectangle gets a negative size), never a panic.
#[derive(Clone, Copy, Debug)]
pub struct Area {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub horizontal_indent: f32,
    pub vertical_indent: f32,
}

impl Area {
    /// Outer rectangle corners, in world space.
    pub fn outer(&self) -> (Vec2, Vec2) {
        (Vec2::new(self.x1, self.y1), Vec2::new(self.x2, self.y2))
    }

    /// Inner cut-out corners: the outer rectangle shrunk symmetrically by
    /// the indents. May be inverted for degenerate indents.
    pub fn inner(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(
                self.x1 + self.horizontal_indent,
                self.y1 + self.vertical_indent,
            ),
            Vec2::new(
                self.x2 - self.horizontal_indent,
                self.y2 - self.vertical_indent,
            ),
        )
    }
}

/// Everything the loader produces: the ordered iteration log plus the
/// static overlays. The ordered list drives sequential playback; the
/// [`IterationIndex`] built from it drives point lookups by id.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub iterations: Vec<Iteration>,
    pub obstacles: Vec<Obstacle>,
    pub areas: Vec<Area>,
}

impl Scene {
    /// Index of the last iteration in the ordered list.
    pub fn last_cursor(&self) -> usize {
        self.iterations.len().saturating_sub(1)
    }
}
