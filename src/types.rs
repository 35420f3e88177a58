//! Common types and enums for the trajectory sketch.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of a single flight.
///
/// A run starts `Running` after a successful launch and moves to `Stopped`
/// once the projectile leaves the canvas. There is no transition back except
/// through a restart.
///
/// # Example
/// ```
/// use bevy_projectile_trail::types::RunPhase;
///
/// assert_eq!(RunPhase::default(), RunPhase::Stopped);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum RunPhase {
    /// Step system is advancing the projectile every fixed tick
    Running,
    /// Nothing launched yet, the launch was rejected, or the projectile left the canvas
    #[default]
    Stopped,
}

/// Canvas edge through which the projectile left.
///
/// Only the right and bottom edges end a run. A projectile that leaves
/// through the top or left keeps flying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum ExitEdge {
    /// `y > canvas_height`
    Bottom,
    /// `x > canvas_width`
    Right,
}

/// What a [`Dot`] represents in a rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum DotKind {
    /// A prior position
    Trail,
    /// The current position
    Projectile,
}

/// One filled circle to draw, in canvas coordinates.
///
/// # Fields
/// * `center` - Circle center (top-left origin, y down)
/// * `diameter` - Circle diameter in canvas pixels
/// * `kind` - Whether this is a trail dot or the projectile marker
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct Dot {
    pub center: Vec2,
    pub diameter: f32,
    pub kind: DotKind,
}

/// Maps canvas coordinates onto Bevy 2D world space.
///
/// The canvas has its origin in the top-left corner with y growing downward.
/// A default `Camera2d` looks at the world origin with y growing upward, so a
/// canvas of `size` is centered on the origin and flipped vertically.
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_projectile_trail::types::CanvasSpace;
///
/// let canvas = CanvasSpace::new(600.0, 400.0);
/// assert_eq!(canvas.to_world(Vec2::new(0.0, 0.0)), Vec2::new(-300.0, 200.0));
/// assert_eq!(canvas.to_world(Vec2::new(300.0, 200.0)), Vec2::ZERO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpace {
    pub size: Vec2,
}

impl CanvasSpace {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Canvas point to world point.
    pub fn to_world(&self, canvas: Vec2) -> Vec2 {
        let half = self.size / 2.0;
        Vec2::new(canvas.x - half.x, half.y - canvas.y)
    }

    /// World point back to canvas point.
    pub fn to_canvas(&self, world: Vec2) -> Vec2 {
        let half = self.size / 2.0;
        Vec2::new(world.x + half.x, half.y - world.y)
    }

    /// Canvas velocity to world velocity (only the vertical axis flips).
    pub fn vector_to_world(&self, canvas: Vec2) -> Vec2 {
        Vec2::new(canvas.x, -canvas.y)
    }
}
