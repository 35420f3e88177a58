//! Systems module - all ECS systems for the trajectory sketch.

pub mod debug;
pub mod kinematics;
pub mod render;
