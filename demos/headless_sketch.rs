use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_projectile_trail::prelude::*;
use std::time::Duration;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / 60.0))))
        .add_plugins(LogPlugin::default())
        .add_plugins(TrajectoryCorePlugin)
        .add_systems(Update, (print_progress, finish_on_exit))
        .run();
}

fn print_progress(state: Res<SimulationState>, mut last_reported: Local<u32>) {
    if state.ticks >= *last_reported + 10 {
        *last_reported = state.ticks;
        info!(
            "tick {}: position ({:.1}, {:.1}), velocity ({:.2}, {:.2})",
            state.ticks, state.position.x, state.position.y, state.velocity.x, state.velocity.y
        );
    }
}

fn finish_on_exit(
    mut exits: MessageReader<TrajectoryExited>,
    state: Res<SimulationState>,
    mut app_exit: MessageWriter<AppExit>,
) {
    for exit in exits.read() {
        let apex = state
            .trail
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min);
        info!(
            "{:?} edge after {} ticks, {} trail points, apex y = {:.1}",
            exit.edge,
            exit.ticks,
            state.trail.len(),
            apex
        );
        app_exit.write(AppExit::Success);
    }
}
