//! Messages for the trajectory sketch.
//!
//! Note: In Bevy 0.18, buffered events use the `Message` trait instead of `Event`.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::types::ExitEdge;

/// Request a new run from the current [`LaunchConfig`](crate::resources::LaunchConfig).
///
/// The trail is cleared and the projectile goes back to its launch point.
/// The sketch binds no key to this; the host app writes it when it wants
/// another flight.
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_projectile_trail::prelude::*;
///
/// fn restart_on_r(keys: Res<ButtonInput<KeyCode>>, mut restart: MessageWriter<RestartSimulation>) {
///     if keys.just_pressed(KeyCode::KeyR) {
///         restart.write(RestartSimulation);
///     }
/// }
/// ```
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct RestartSimulation;

/// Written once per run, on the tick the projectile leaves the canvas.
///
/// # Fields
/// * `edge` - Edge that was crossed
/// * `ticks` - Steps taken before stopping
/// * `position` - Final position in canvas coordinates
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryExited {
    pub edge: ExitEdge,
    pub ticks: u32,
    pub position: Vec2,
}
