use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_projectile_trail::prelude::*;

fn main() {
    let config = LaunchConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Projectile trail".into(),
                resolution: WindowResolution::new(
                    config.canvas_width as u32,
                    config.canvas_height as u32,
                ),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .insert_resource(RenderStyle {
            debug_draw: false,
            ..default()
        })
        .add_plugins(TrajectoryPluginGroup)
        .add_systems(Startup, setup)
        .add_systems(Update, report_exit)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn report_exit(mut exits: MessageReader<TrajectoryExited>) {
    for exit in exits.read() {
        info!(
            "stopped after {} ticks through the {:?} edge",
            exit.ticks, exit.edge
        );
    }
}
