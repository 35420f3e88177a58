use bevy::prelude::*;

use crate::resources::{LaunchConfig, RenderStyle, SimulationState};
use crate::types::CanvasSpace;

/// Draw debug gizmos for the projectile.
///
/// Draws the velocity vector and the canvas outline.
pub fn draw_projectile_debug(
    mut gizmos: Gizmos,
    state: Res<SimulationState>,
    config: Res<LaunchConfig>,
    style: Res<RenderStyle>,
) {
    if !style.debug_draw {
        return;
    }

    let canvas = CanvasSpace::new(config.canvas_width, config.canvas_height);
    let center = canvas.to_world(state.position);

    // Scaled up, one tick of motion is barely visible
    let end = center + canvas.vector_to_world(state.velocity) * 4.0;
    gizmos.line_2d(center, end, Color::srgb(0.0, 1.0, 0.0));

    gizmos.rect_2d(Isometry2d::IDENTITY, canvas.size, Color::srgb(1.0, 0.0, 0.0));
}
