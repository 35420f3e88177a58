//! Kinematics systems - launch, unit-step Euler flight, and canvas exit.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::events::{RestartSimulation, TrajectoryExited};
use crate::resources::{LaunchConfig, RunState, SimulationState};
use crate::types::RunPhase;

/// Run condition: true while the projectile is still on the canvas.
pub fn simulation_running(run: Res<RunState>) -> bool {
    run.is_running()
}

/// Launch the first run at startup.
///
/// # Arguments
/// * `config` - Launch constants
/// * `fixed_time` - Fixed clock, absent in bare test apps
/// * `state` - Simulation state to replace
/// * `run` - Run state to reset
pub fn launch_on_startup(
    config: Res<LaunchConfig>,
    mut fixed_time: Option<ResMut<Time<Fixed>>>,
    mut state: ResMut<SimulationState>,
    mut run: ResMut<RunState>,
) {
    launch(&config, fixed_time.as_deref_mut(), &mut state, &mut run);
}

/// Start a new run for every [`RestartSimulation`] received.
///
/// Several requests in the same tick collapse into one restart. The fixed
/// timestep is re-read from the config, so a changed tick rate takes effect.
pub fn restart_on_request(
    mut requests: MessageReader<RestartSimulation>,
    config: Res<LaunchConfig>,
    mut fixed_time: Option<ResMut<Time<Fixed>>>,
    mut state: ResMut<SimulationState>,
    mut run: ResMut<RunState>,
) {
    if requests.read().count() == 0 {
        return;
    }
    launch(&config, fixed_time.as_deref_mut(), &mut state, &mut run);
}

/// Advance the projectile by one tick.
///
/// Runs in FixedUpdate, gated by [`simulation_running`]. Each fixed update is
/// one unit tick whatever the fixed timestep length is.
pub fn step_projectile(mut state: ResMut<SimulationState>) {
    let (position, trail) = state.step();
    debug!(
        "tick {}: position ({:.2}, {:.2})",
        trail.len(),
        position.x,
        position.y
    );
}

/// Stop the run once the projectile crosses the right or bottom edge.
///
/// # Arguments
/// * `config` - Canvas size
/// * `state` - State after this tick's step
/// * `run` - Run state to move to `Stopped`
/// * `exits` - Writer for the one [`TrajectoryExited`] of the run
pub fn check_canvas_exit(
    config: Res<LaunchConfig>,
    state: Res<SimulationState>,
    mut run: ResMut<RunState>,
    mut exits: MessageWriter<TrajectoryExited>,
) {
    let Some(edge) = state.exit_edge(config.canvas_width, config.canvas_height) else {
        return;
    };

    run.phase = RunPhase::Stopped;
    run.exit = Some(edge);

    info!(
        "projectile left the canvas ({:?} edge) after {} ticks at ({:.2}, {:.2})",
        edge, state.ticks, state.position.x, state.position.y
    );
    exits.write(TrajectoryExited {
        edge,
        ticks: state.ticks,
        position: state.position,
    });
}

/// Replace the state with a fresh run, or stop if the config is rejected.
///
/// On success the fixed clock, when present, is set to the config's tick rate.
fn launch(
    config: &LaunchConfig,
    fixed_time: Option<&mut Time<Fixed>>,
    state: &mut SimulationState,
    run: &mut RunState,
) {
    match SimulationState::try_initialize(config) {
        Ok(fresh) => {
            if let (Some(fixed_time), Some(period)) = (fixed_time, config.tick_period()) {
                fixed_time.set_timestep(period);
            }
            info!(
                "launching at {:.1}° with speed {:.2} from ({:.1}, {:.1})",
                config.launch_angle_degrees,
                config.launch_speed,
                fresh.position.x,
                fresh.position.y
            );
            *state = fresh;
            *run = RunState::running();
        }
        Err(err) => {
            error!("launch config rejected: {err}");
            run.phase = RunPhase::Stopped;
            run.exit = None;
        }
    }
}
