//! Render systems - turns the simulation state into filled circles.

use bevy::prelude::*;

use crate::components::{ProjectileMarker, TrailDot};
use crate::resources::{LaunchConfig, RenderStyle, SimulationState, TrailAssets};
use crate::types::{CanvasSpace, Dot, DotKind};

const TRAIL_Z: f32 = 0.0;
const MARKER_Z: f32 = 1.0;

/// Dots to draw for the current frame.
///
/// Trail dots come first in trail order, followed by a single marker dot at
/// the current position.
///
/// # Arguments
/// * `state` - Simulation state to draw
/// * `style` - Diameters for trail and marker
///
/// # Returns
/// `state.trail.len() + 1` dots in canvas coordinates
pub fn frame_dots(state: &SimulationState, style: &RenderStyle) -> Vec<Dot> {
    let mut dots = Vec::with_capacity(state.trail.len() + 1);
    dots.extend(state.trail.iter().map(|&center| Dot {
        center,
        diameter: style.trail_diameter,
        kind: DotKind::Trail,
    }));
    dots.push(Dot {
        center: state.position,
        diameter: style.marker_diameter,
        kind: DotKind::Projectile,
    });
    dots
}

/// Create the shared circle mesh and materials, set the background and
/// spawn the marker entity.
pub fn setup_trail_assets(
    mut commands: Commands,
    mut assets: ResMut<TrailAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    style: Res<RenderStyle>,
) {
    assets.dot_mesh = meshes.add(Circle::new(0.5));
    assets.trail_material = materials.add(ColorMaterial::from_color(style.trail_color));
    assets.marker_material = materials.add(ColorMaterial::from_color(style.marker_color));

    commands.insert_resource(ClearColor(style.background));

    commands.spawn((
        Mesh2d(assets.dot_mesh.clone()),
        MeshMaterial2d(assets.marker_material.clone()),
        Transform::from_xyz(0.0, 0.0, MARKER_Z).with_scale(Vec3::splat(style.marker_diameter)),
        ProjectileMarker,
        Name::new("Projectile"),
    ));
}

/// Keep one trail-dot entity per trail entry and move the marker.
///
/// Trail dots are only ever added during a run. If the trail is shorter than
/// the number of drawn dots, a restart happened and every dot is despawned
/// before drawing again.
///
/// # Arguments
/// * `commands` - Bevy Commands for spawning and despawning dots
/// * `state` - Simulation state to mirror
/// * `config` - Canvas size for the canvas-to-world mapping
/// * `style` - Dot diameters
/// * `assets` - Shared mesh and materials
/// * `drawn` - Trail dots already on screen
/// * `marker` - The projectile marker
pub fn sync_trail_dots(
    mut commands: Commands,
    state: Res<SimulationState>,
    config: Res<LaunchConfig>,
    style: Res<RenderStyle>,
    assets: Res<TrailAssets>,
    drawn: Query<Entity, With<TrailDot>>,
    mut marker: Query<&mut Transform, With<ProjectileMarker>>,
) {
    if !state.is_changed() {
        return;
    }

    let canvas = CanvasSpace::new(config.canvas_width, config.canvas_height);
    let mut drawn_count = drawn.iter().count();
    if drawn_count > state.trail.len() {
        for entity in drawn.iter() {
            commands.entity(entity).despawn();
        }
        drawn_count = 0;
    }

    for (index, dot) in frame_dots(&state, &style).into_iter().enumerate() {
        let translation = canvas.to_world(dot.center);
        match dot.kind {
            DotKind::Trail if index >= drawn_count => {
                commands.spawn((
                    Mesh2d(assets.dot_mesh.clone()),
                    MeshMaterial2d(assets.trail_material.clone()),
                    Transform::from_translation(translation.extend(TRAIL_Z))
                        .with_scale(Vec3::splat(dot.diameter)),
                    TrailDot { index },
                ));
            }
            DotKind::Trail => {}
            DotKind::Projectile => {
                for mut transform in marker.iter_mut() {
                    transform.translation = translation.extend(MARKER_Z);
                    transform.scale = Vec3::splat(dot.diameter);
                }
            }
        }
    }
}
