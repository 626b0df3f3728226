//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies (collaborators enter via traits)

pub mod bullet;
pub mod item;
pub mod manager;
pub mod moveable;
pub mod pool;

pub use bullet::{Bullet, BulletKind, BulletTemplate, MotionSpec};
pub use item::{Item, ItemKind, PickupEffect};
pub use manager::MoveableManager;
pub use moveable::{GrazeSink, Moveable, Player, RenderBatch, SpriteId};
pub use pool::BulletPool;
