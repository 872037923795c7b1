// render/draw.rs
// Drawing passes, one per overlay category, plus the segment primitive they
// all share. Everything takes world-space geometry and pushes screen-space
// commands through the camera.

use std::f32::consts::TAU;

use ultraviolet::Vec2;

use crate::camera::Camera;
use crate::config;
use crate::scene::{Area, Iteration, IterationIndex, Obstacle};

use super::commands::{Color, Frame};
use super::DrawError;

/// Rotation that carries an axis-aligned rectangle onto the segment
/// `begin -> end`: the angle between the segment direction and the negative
/// X axis via `acos`, complemented to `TAU - angle` when `begin.y > end.y`
/// (acos alone cannot tell clockwise from counter-clockwise).
pub fn segment_angle(begin: Vec2, end: Vec2) -> f32 {
    let v = (begin - end).normalized();
    let mut angle = v.dot(Vec2::new(-1.0, 0.0)).clamp(-1.0, 1.0).acos();
    if begin.y > end.y {
        angle = TAU - angle;
    }
    angle
}

/// Draw an arbitrary screen-space line segment as a rotated filled
/// rectangle: width = segment length, height = thickness, top-left anchored
/// at `begin` with a half-thickness correction, rotated about that anchor.
///
/// Zero-length segments are skipped; non-finite endpoints fail the pass.
pub fn segment(
    frame: &mut Frame,
    begin: Vec2,
    end: Vec2,
    thickness: f32,
    color: Color,
) -> Result<(), DrawError> {
    ensure_finite(begin)?;
    ensure_finite(end)?;

    let length = (end - begin).mag();
    if length == 0.0 {
        return Ok(());
    }

    let pos = Vec2::new(begin.x - thickness / 2.0, begin.y - thickness / 2.0);
    frame.rotated_rect(
        pos,
        Vec2::new(length, thickness),
        segment_angle(begin, end),
        color,
    );
    Ok(())
}

fn ensure_finite(p: Vec2) -> Result<(), DrawError> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(DrawError::NonFinite)
    }
}

/// Areas: outer fill, inner cut-out in the background color, then the four
/// border segments along the outer edge. Inverted inner rectangles come out
/// with negative sizes and render mirrored.
pub fn areas(frame: &mut Frame, areas: &[Area], camera: &Camera) -> Result<(), DrawError> {
    for area in areas {
        let (o1, o2) = area.outer();
        let (i1, i2) = area.inner();
        let p1 = camera.world_to_screen(o1);
        let p2 = camera.world_to_screen(o2);
        let q1 = camera.world_to_screen(i1);
        let q2 = camera.world_to_screen(i2);
        ensure_finite(p1)?;
        ensure_finite(p2)?;
        ensure_finite(q1)?;
        ensure_finite(q2)?;

        frame.rect(p1, p2 - p1, config::AREA_FILL_COLOR);
        frame.rect(q1, q2 - q1, config::BACKGROUND_COLOR);

        let corners = [
            p1,
            Vec2::new(p1.x, p2.y),
            p2,
            Vec2::new(p2.x, p1.y),
        ];
        for i in 0..4 {
            segment(
                frame,
                corners[i],
                corners[(i + 1) % 4],
                config::AREA_BORDER_THICKNESS,
                config::AREA_BORDER_COLOR,
            )?;
        }
    }
    Ok(())
}

/// Obstacles: one segment per consecutive point pair of each polyline.
pub fn obstacles(frame: &mut Frame, obstacles: &[Obstacle], camera: &Camera) -> Result<(), DrawError> {
    for obstacle in obstacles {
        for pair in obstacle.points.windows(2) {
            segment(
                frame,
                camera.world_to_screen(pair[0]),
                camera.world_to_screen(pair[1]),
                config::OBSTACLE_THICKNESS,
                config::OBSTACLE_COLOR,
            )?;
        }
    }
    Ok(())
}

/// Agents of the current iteration as fixed-size screen-space squares.
/// The first half of the recorded sequence gets one color, the rest the
/// other; the split is list position, `count / 2`, and deliberately so.
pub fn agents(frame: &mut Frame, iteration: &Iteration, camera: &Camera) -> Result<(), DrawError> {
    let split = iteration.agents.len() / 2;
    let half = config::AGENT_SIZE_PX / 2.0;
    for (i, agent) in iteration.agents.iter().enumerate() {
        let center = camera.world_to_screen(agent.pos);
        ensure_finite(center)?;
        let color = if i < split {
            config::AGENT_GROUP_A_COLOR
        } else {
            config::AGENT_GROUP_B_COLOR
        };
        frame.rect(
            Vec2::new(center.x - half, center.y - half),
            Vec2::new(config::AGENT_SIZE_PX, config::AGENT_SIZE_PX),
            color,
        );
    }
    Ok(())
}

/// One-step trails: for each current agent, a segment back to its position
/// at `prev_number`. `None` (first iteration) draws nothing; an index miss
/// (agent spawned this iteration) skips just that agent.
pub fn trails(
    frame: &mut Frame,
    iteration: &Iteration,
    prev_number: Option<u32>,
    index: &IterationIndex,
    camera: &Camera,
) -> Result<(), DrawError> {
    let Some(prev_number) = prev_number else {
        return Ok(());
    };
    for agent in &iteration.agents {
        if let Some(prev) = index.lookup(prev_number, agent.id) {
            segment(
                frame,
                camera.world_to_screen(agent.pos),
                camera.world_to_screen(prev.pos),
                config::TRAIL_THICKNESS,
                config::TRAIL_COLOR,
            )?;
        }
    }
    Ok(())
}

/// HUD overlay in raw screen space: zoom and the current iteration number.
pub fn hud(frame: &mut Frame, zoom: f32, iteration_number: u32) {
    frame.text(
        format!("zoom: {}", zoom),
        Vec2::new(config::HUD_ZOOM_POS.0, config::HUD_ZOOM_POS.1),
        config::HUD_COLOR,
    );
    frame.text(
        format!("Iteration: {}", iteration_number),
        Vec2::new(config::HUD_ITERATION_POS.0, config::HUD_ITERATION_POS.1),
        config::HUD_COLOR,
    );
}
