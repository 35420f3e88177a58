//! Components for the drawn trail and marker.

use bevy::prelude::*;

/// One drawn trail dot.
///
/// `index` is the dot's position in [`SimulationState::trail`](crate::resources::SimulationState::trail).
#[derive(Component, Reflect, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct TrailDot {
    pub index: usize,
}

/// The highlighted circle at the projectile's current position.
#[derive(Component, Reflect, Clone, Copy, Debug, Default)]
#[reflect(Component)]
pub struct ProjectileMarker;
