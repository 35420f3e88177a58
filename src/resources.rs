//! Global resources for the trajectory sketch.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;
use crate::types::{ExitEdge, RunPhase};

/// Launch constants for a run.
///
/// All quantities are in canvas units: pixels for lengths, pixels per tick
/// for speed, and pixels per tick² for gravity. The canvas origin is its
/// top-left corner with y growing downward.
///
/// # Fields
/// * `canvas_width` - Canvas width; crossing it to the right ends the run
/// * `canvas_height` - Canvas height; crossing it downward ends the run
/// * `launch_angle_degrees` - Launch angle above the horizontal
/// * `launch_speed` - Initial speed
/// * `gravity` - Downward velocity change per tick
/// * `origin_inset` - Distance of the launch point from the left and bottom edges
/// * `tick_rate_hz` - Fixed schedule rate that drives the step system
///
/// # Example
/// ```
/// use bevy_projectile_trail::resources::LaunchConfig;
///
/// let config = LaunchConfig {
///     launch_angle_degrees: 60.0,
///     launch_speed: 12.0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Resource, Reflect, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct LaunchConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub launch_angle_degrees: f32,
    pub launch_speed: f32,
    pub gravity: f32,
    pub origin_inset: f32,
    pub tick_rate_hz: f64,
}

impl Default for LaunchConfig {
    /// 600x400 canvas, 45° at speed 15, gravity 0.5, launched 50px in from
    /// the bottom-left corner, stepped at 60 Hz.
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 400.0,
            launch_angle_degrees: 45.0,
            launch_speed: 15.0,
            gravity: 0.5,
            origin_inset: 50.0,
            tick_rate_hz: 60.0,
        }
    }
}

impl LaunchConfig {
    /// Launch point in canvas coordinates.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.origin_inset, self.canvas_height - self.origin_inset)
    }

    /// Initial velocity in canvas coordinates.
    ///
    /// The vertical component is negated because canvas y grows downward.
    pub fn launch_velocity(&self) -> Vec2 {
        let (sin, cos) = self.launch_angle_degrees.to_radians().sin_cos();
        Vec2::new(self.launch_speed * cos, -self.launch_speed * sin)
    }

    /// Fixed timestep for `tick_rate_hz`, if it is a positive, representable duration.
    pub fn tick_period(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.tick_rate_hz.recip())
            .ok()
            .filter(|period| !period.is_zero())
    }

    /// Check that the config describes a launch the sketch can animate.
    ///
    /// # Returns
    /// The first problem found, if any
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("launch_angle_degrees", self.launch_angle_degrees),
            ("launch_speed", self.launch_speed),
            ("gravity", self.gravity),
            ("origin_inset", self.origin_inset),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if !self.tick_rate_hz.is_finite() {
            return Err(ConfigError::NonFinite { field: "tick_rate_hz" });
        }

        let positive = [
            ("canvas_width", f64::from(self.canvas_width)),
            ("canvas_height", f64::from(self.canvas_height)),
            ("launch_speed", f64::from(self.launch_speed)),
            ("gravity", f64::from(self.gravity)),
            ("tick_rate_hz", self.tick_rate_hz),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.tick_period().is_none() {
            return Err(ConfigError::TickRateOutOfRange {
                hz: self.tick_rate_hz,
            });
        }

        // An upward launch only comes back down if each tick's gravity
        // survives rounding against the launch vertical velocity.
        let vertical_velocity = self.launch_velocity().y;
        if vertical_velocity < 0.0 && vertical_velocity + self.gravity == vertical_velocity {
            return Err(ConfigError::GravityBelowPrecision {
                gravity: self.gravity,
                vertical_velocity,
            });
        }

        if self.origin_inset < 0.0
            || self.origin_inset >= self.canvas_width
            || self.origin_inset >= self.canvas_height
        {
            return Err(ConfigError::InsetOutsideCanvas {
                inset: self.origin_inset,
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        Ok(())
    }
}

/// How a frame is drawn.
///
/// # Fields
/// * `background` - Canvas clear color
/// * `trail_color` - Fill for trail dots
/// * `marker_color` - Fill for the current-position marker
/// * `trail_diameter` - Trail dot diameter (canvas pixels)
/// * `marker_diameter` - Marker diameter (canvas pixels)
/// * `debug_draw` - Overlay the velocity vector with gizmos
#[derive(Resource, Reflect, Clone, Debug)]
#[reflect(Resource)]
pub struct RenderStyle {
    pub background: Color,
    pub trail_color: Color,
    pub marker_color: Color,
    pub trail_diameter: f32,
    pub marker_diameter: f32,
    pub debug_draw: bool,
}

impl Default for RenderStyle {
    /// Dark gray background, white 3px trail, 20px cyan marker.
    fn default() -> Self {
        Self {
            background: Color::srgb_u8(30, 30, 30),
            trail_color: Color::WHITE,
            marker_color: Color::srgb_u8(0x00, 0xf6, 0xff),
            trail_diameter: 3.0,
            marker_diameter: 20.0,
            debug_draw: false,
        }
    }
}

/// Position, velocity and trail of the one projectile in flight.
///
/// Everything is in canvas coordinates. The state only moves forward through
/// [`SimulationState::step`]; it has no notion of the canvas bounds, so the
/// caller decides when to stop stepping (see [`SimulationState::exit_edge`]).
///
/// # Example
/// ```
/// use bevy_projectile_trail::resources::{LaunchConfig, SimulationState};
///
/// let mut state = SimulationState::initialize(&LaunchConfig::default());
/// while state.exit_edge(600.0, 400.0).is_none() {
///     state.step();
/// }
/// assert_eq!(state.trail.len() as u32, state.ticks);
/// ```
#[derive(Resource, Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(Resource)]
pub struct SimulationState {
    /// Current position
    pub position: Vec2,
    /// Current velocity (per tick)
    pub velocity: Vec2,
    /// Downward velocity change per tick, fixed for the run
    pub gravity: f32,
    /// Every pre-step position, oldest first
    pub trail: Vec<Vec2>,
    /// Number of steps taken this run
    pub ticks: u32,
}

impl SimulationState {
    /// Start a fresh run from `config` without validating it.
    pub fn initialize(config: &LaunchConfig) -> Self {
        Self {
            position: config.origin(),
            velocity: config.launch_velocity(),
            gravity: config.gravity,
            trail: Vec::new(),
            ticks: 0,
        }
    }

    /// Start a fresh run after validating `config`.
    pub fn try_initialize(config: &LaunchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::initialize(config))
    }

    /// Advance one tick with unit-step Euler integration.
    ///
    /// The current position goes onto the trail first, then velocity picks up
    /// gravity and position moves by the new velocity.
    ///
    /// # Returns
    /// The updated position and the full trail
    pub fn step(&mut self) -> (Vec2, &[Vec2]) {
        self.trail.push(self.position);
        self.velocity.y += self.gravity;
        self.position += self.velocity;
        self.ticks += 1;
        (self.position, &self.trail)
    }

    /// Edge the projectile has crossed, if any.
    ///
    /// Only the bottom (`y > height`) and right (`x > width`) edges count;
    /// bottom wins when both are crossed on the same tick.
    pub fn exit_edge(&self, width: f32, height: f32) -> Option<ExitEdge> {
        if self.position.y > height {
            Some(ExitEdge::Bottom)
        } else if self.position.x > width {
            Some(ExitEdge::Right)
        } else {
            None
        }
    }
}

/// Where the current run is in its lifecycle.
#[derive(Resource, Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(Resource)]
pub struct RunState {
    pub phase: RunPhase,
    /// Edge that stopped the run, if it ended by leaving the canvas
    pub exit: Option<ExitEdge>,
}

impl RunState {
    pub fn running() -> Self {
        Self {
            phase: RunPhase::Running,
            exit: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }
}

/// Shared meshes and materials for drawing dots.
///
/// The dot mesh is a circle of unit diameter; each entity scales it to the
/// diameter it needs.
#[derive(Resource, Default)]
pub struct TrailAssets {
    pub dot_mesh: Handle<Mesh>,
    pub trail_material: Handle<ColorMaterial>,
    pub marker_material: Handle<ColorMaterial>,
}
