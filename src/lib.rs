//! Barrage - transient-entity orchestration for bullet-hell games
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (bullets, items, recycling pool)
//! - `tuning`: Data-driven bullet template registry
//!
//! The crate is headless: rendering, the player, and the screen/session are
//! external collaborators reached through the traits in [`sim::moveable`].

pub mod sim;
pub mod tuning;

pub use sim::{Bullet, BulletKind, BulletTemplate, Item, MoveableManager};
pub use tuning::Arsenal;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth motion)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Default bullet hit radius
    pub const BULLET_RADIUS: f32 = 5.0;
    /// Default graze radius (must exceed the hit radius)
    pub const GRAZE_RADIUS: f32 = 24.0;
    /// Default bullet lifetime in seconds
    pub const BULLET_LIFE: f32 = 12.0;

    /// Item hit radius
    pub const ITEM_RADIUS: f32 = 10.0;
    /// Item lifetime in seconds before despawn
    pub const ITEM_LIFE: f32 = 20.0;
    /// Idle downward drift speed for items
    pub const ITEM_FALL_SPEED: f32 = 30.0;

    /// Distance at which a magnetic coin starts chasing the player
    pub const COIN_ATTRACT_RADIUS: f32 = 140.0;
    /// Speed of an attracted coin
    pub const COIN_PULL_SPEED: f32 = 260.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit direction vector for a heading angle
#[inline]
pub fn angle_to_dir(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Perpendicular (counter-clockwise) of a direction vector
#[inline]
pub fn perp(dir: Vec2) -> Vec2 {
    Vec2::new(-dir.y, dir.x)
}
