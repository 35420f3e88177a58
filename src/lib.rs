//! # Bevy Projectile Trail
//!
//! A single-projectile trajectory sketch for Bevy 0.18.
//!
//! ## Features
//! - Unit-step Euler integration under constant gravity, one step per fixed tick
//! - Canvas coordinates (top-left origin, y down) mapped onto a 2D camera
//! - Trail of prior positions drawn as dots, current position as a marker
//! - Run stops once the projectile leaves through the right or bottom edge
//! - Restart on request via a message
//!
//! ## Quick Start
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_projectile_trail::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(TrajectoryPluginGroup)
//!         .add_systems(Startup, |mut commands: Commands| {
//!             commands.spawn(Camera2d);
//!         })
//!         .run();
//! }
//! ```

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;
pub mod types;

#[cfg(test)]
mod trajectory_tests;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::error::*;
    pub use crate::events::*;
    pub use crate::resources::*;
    pub use crate::systems::render::frame_dots;
    pub use crate::types::*;
    pub use crate::TrajectoryPluginGroup;
    pub use crate::{TrajectoryCorePlugin, TrajectoryDebugPlugin, TrajectoryRenderPlugin};
}

use bevy::prelude::*;

/// Main plugin group: simulation, rendering, and the debug overlay.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_projectile_trail::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TrajectoryPluginGroup)
///     .run();
/// ```
#[derive(Default)]
pub struct TrajectoryPluginGroup;

impl PluginGroup for TrajectoryPluginGroup {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(TrajectoryCorePlugin)
            .add(TrajectoryRenderPlugin)
            .add(TrajectoryDebugPlugin)
    }
}

/// Core simulation plugin.
///
/// Owns the launch config, the simulation state and the run state. Needs no
/// rendering, so it also works under `MinimalPlugins` or in a bare `App`.
///
/// # Systems
/// - `launch_on_startup` - Validates the config and starts the first run
/// - `restart_on_request` - Starts a new run on [`events::RestartSimulation`]
/// - `step_projectile` - One Euler step per fixed tick while running
/// - `check_canvas_exit` - Stops the run at the right or bottom edge
pub struct TrajectoryCorePlugin;

impl Plugin for TrajectoryCorePlugin {
    fn build(&self, app: &mut App) {
        use systems::kinematics;

        app.register_type::<resources::LaunchConfig>()
            .register_type::<resources::SimulationState>()
            .register_type::<resources::RunState>()
            .init_resource::<resources::LaunchConfig>()
            .init_resource::<resources::SimulationState>()
            .init_resource::<resources::RunState>()
            .add_message::<events::RestartSimulation>()
            .add_message::<events::TrajectoryExited>()
            .add_systems(Startup, kinematics::launch_on_startup)
            .add_systems(
                FixedUpdate,
                (
                    kinematics::restart_on_request,
                    (kinematics::step_projectile, kinematics::check_canvas_exit)
                        .chain()
                        .run_if(kinematics::simulation_running),
                )
                    .chain(),
            );
    }
}

/// Draws the trail and marker as filled circles.
///
/// Requires the asset and 2D render plugins from `DefaultPlugins`. The host
/// spawns the camera.
///
/// # Systems
/// - `setup_trail_assets` - Circle mesh, materials, background, marker entity
/// - `sync_trail_dots` - Spawns new trail dots and moves the marker
pub struct TrajectoryRenderPlugin;

impl Plugin for TrajectoryRenderPlugin {
    fn build(&self, app: &mut App) {
        use systems::render;

        app.register_type::<components::TrailDot>()
            .register_type::<components::ProjectileMarker>()
            .register_type::<resources::RenderStyle>()
            .init_resource::<resources::RenderStyle>()
            .init_resource::<resources::TrailAssets>()
            .add_systems(Startup, render::setup_trail_assets)
            .add_systems(Update, render::sync_trail_dots);
    }
}

/// Debug plugin for trajectory visualization.
pub struct TrajectoryDebugPlugin;

impl Plugin for TrajectoryDebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<resources::RenderStyle>()
            .add_systems(Update, systems::debug::draw_projectile_debug);
    }
}
