use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::prelude::*;
use crate::systems::kinematics;

#[derive(Resource, Default)]
struct ExitLog(Vec<TrajectoryExited>);

fn record_exits(mut exits: MessageReader<TrajectoryExited>, mut log: ResMut<ExitLog>) {
    log.0.extend(exits.read().copied());
}

/// Bare app with only the core plugin. `FixedUpdate` is driven by hand.
fn core_app() -> App {
    let mut app = App::new();
    app.add_plugins(TrajectoryCorePlugin)
        .init_resource::<ExitLog>()
        .add_systems(
            FixedUpdate,
            record_exits.after(kinematics::check_canvas_exit),
        );
    app
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

#[test]
fn test_startup_launches_from_origin() {
    let mut app = core_app();
    app.update();

    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.position, Vec2::new(50.0, 350.0));
    assert!(state.trail.is_empty());
    assert!((state.velocity.x - 10.6066).abs() < 1e-3);
    assert!((state.velocity.y + 10.6066).abs() < 1e-3);
    assert!(app.world().resource::<RunState>().is_running());
}

#[test]
fn test_one_step_per_fixed_tick() {
    let mut app = core_app();
    app.update();
    run_ticks(&mut app, 10);

    let state = app.world().resource::<SimulationState>();
    assert_eq!(state.ticks, 10);
    assert_eq!(state.trail.len(), 10);
    assert!(app.world().resource::<RunState>().is_running());
}

#[test]
fn test_loop_halts_after_leaving_canvas() {
    let mut app = core_app();
    app.update();
    run_ticks(&mut app, 120);

    let state = app.world().resource::<SimulationState>().clone();
    assert_eq!(state.ticks, 46);
    assert_eq!(state.trail.len(), 46);
    assert!(state.position.y > 400.0);

    let run = app.world().resource::<RunState>();
    assert_eq!(run.phase, RunPhase::Stopped);
    assert_eq!(run.exit, Some(ExitEdge::Bottom));

    let log = &app.world().resource::<ExitLog>().0;
    assert_eq!(log.len(), 1, "exit should be reported once per run");
    assert_eq!(log[0].edge, ExitEdge::Bottom);
    assert_eq!(log[0].ticks, 46);
    assert_eq!(log[0].position, state.position);

    // Further ticks leave everything untouched
    run_ticks(&mut app, 10);
    assert_eq!(*app.world().resource::<SimulationState>(), state);
}

#[test]
fn test_restart_after_stop_starts_a_clean_run() {
    let mut app = core_app();
    app.update();
    run_ticks(&mut app, 120);
    assert!(!app.world().resource::<RunState>().is_running());

    app.world_mut().write_message(RestartSimulation);
    run_ticks(&mut app, 1);

    let state = app.world().resource::<SimulationState>().clone();
    assert!(state.ticks <= 1);
    assert_eq!(state.trail.len() as u32, state.ticks);

    let mut expected = SimulationState::initialize(&LaunchConfig::default());
    for _ in 0..state.ticks {
        expected.step();
    }
    assert_eq!(state, expected);

    let run = app.world().resource::<RunState>();
    assert!(run.is_running());
    assert_eq!(run.exit, None);
}

#[test]
fn test_host_config_overrides_defaults() {
    let mut app = App::new();
    app.insert_resource(LaunchConfig {
        launch_angle_degrees: 60.0,
        launch_speed: 10.0,
        ..Default::default()
    });
    app.add_plugins(TrajectoryCorePlugin);
    app.update();

    let state = app.world().resource::<SimulationState>();
    assert!((state.velocity.x - 5.0).abs() < 1e-3);
    assert!((state.velocity.y + 8.6603).abs() < 1e-3);
}

#[test]
fn test_rejected_config_never_steps() {
    let mut app = App::new();
    app.insert_resource(LaunchConfig {
        gravity: -0.5,
        ..Default::default()
    });
    app.add_plugins(TrajectoryCorePlugin);
    app.update();
    run_ticks(&mut app, 5);

    assert_eq!(app.world().resource::<RunState>().phase, RunPhase::Stopped);
    assert_eq!(app.world().resource::<SimulationState>().ticks, 0);
}

#[test]
fn test_config_from_partial_json() {
    let config: LaunchConfig =
        serde_json::from_str(r#"{ "launch_angle_degrees": 30.0, "gravity": 0.25 }"#)
            .expect("valid config json");

    assert_eq!(config.launch_angle_degrees, 30.0);
    assert_eq!(config.gravity, 0.25);
    assert_eq!(config.canvas_width, 600.0);
    assert_eq!(config.launch_speed, 15.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_restart_applies_changed_tick_rate() {
    let mut app = core_app();
    app.init_resource::<Time<Fixed>>();
    app.update();

    let period = app.world().resource::<Time<Fixed>>().timestep();
    assert!((period.as_secs_f64() - 1.0 / 60.0).abs() < 1e-6);

    app.world_mut().resource_mut::<LaunchConfig>().tick_rate_hz = 30.0;
    app.world_mut().write_message(RestartSimulation);
    run_ticks(&mut app, 1);

    let period = app.world().resource::<Time<Fixed>>().timestep();
    assert!((period.as_secs_f64() - 1.0 / 30.0).abs() < 1e-6);
}

/// Core and render plugins with bare asset storages; no window or GPU.
fn render_app() -> App {
    let mut app = core_app();
    app.init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<ColorMaterial>>()
        .add_plugins(TrajectoryRenderPlugin);
    app
}

fn trail_dot_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<TrailDot>>()
        .iter(app.world())
        .count()
}

fn marker_translations(app: &mut App) -> Vec<Vec3> {
    app.world_mut()
        .query_filtered::<&Transform, With<ProjectileMarker>>()
        .iter(app.world())
        .map(|transform| transform.translation)
        .collect()
}

#[test]
fn test_render_draws_one_dot_per_trail_entry() {
    let mut app = render_app();
    app.update();
    assert_eq!(trail_dot_count(&mut app), 0);

    run_ticks(&mut app, 12);
    app.update();
    assert_eq!(trail_dot_count(&mut app), 12);

    let mut indices: Vec<usize> = app
        .world_mut()
        .query::<&TrailDot>()
        .iter(app.world())
        .map(|dot| dot.index)
        .collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());

    // Nothing new to draw without another tick
    app.update();
    assert_eq!(trail_dot_count(&mut app), 12);
}

#[test]
fn test_marker_follows_current_position() {
    let mut app = render_app();
    app.update();
    run_ticks(&mut app, 5);
    app.update();

    let state = app.world().resource::<SimulationState>().clone();
    let expected = CanvasSpace::new(600.0, 400.0).to_world(state.position);

    let markers = marker_translations(&mut app);
    assert_eq!(markers.len(), 1, "exactly one marker should be drawn");
    assert!((markers[0].truncate() - expected).length() < 1e-4);
    assert!(markers[0].z > 0.0, "marker should sit above the trail");
}

#[test]
fn test_restart_clears_drawn_trail() {
    let mut app = render_app();
    app.update();
    run_ticks(&mut app, 120);
    app.update();
    assert_eq!(trail_dot_count(&mut app), 46);

    app.world_mut().write_message(RestartSimulation);
    run_ticks(&mut app, 1);
    app.update();

    let trail_len = app.world().resource::<SimulationState>().trail.len();
    assert!(trail_len <= 1);
    assert_eq!(trail_dot_count(&mut app), trail_len);
}
