//! Shared entity contract and collaborator seams
//!
//! Every transient entity (bullet or item) implements [`Moveable`]. The
//! rendering backend, the player, and the screen/session controller are
//! external: the simulation only sees them through the traits below.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::item::PickupEffect;

/// Opaque handle naming an entity's visual representation.
///
/// The simulation never interprets this; it is passed straight through to
/// the render batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u16);

/// Player collaborator as seen by the simulation.
///
/// The core reads position, hit shape, and the magnet flag, and mutates the
/// player only through the two collision hooks.
pub trait Player {
    /// Player center position
    fn pos(&self) -> Vec2;
    /// Radius of the player's hit circle
    fn hit_radius(&self) -> f32;
    /// Whether magnet mode is currently active
    fn magnet_active(&self) -> bool;
    /// A bullet collided with the player
    fn on_bullet_hit(&mut self, damage: f32);
    /// An item was collected by the player
    fn on_pickup(&mut self, effect: PickupEffect);
}

/// Rendering collaborator: accepts draw calls for surviving entities.
pub trait RenderBatch {
    /// Queue one sprite at a position with a heading angle (radians)
    fn draw(&mut self, sprite: SpriteId, pos: Vec2, angle: f32);
}

/// Screen/session collaborator that receives graze notifications.
///
/// Fire-and-forget: may be called several times per frame.
pub trait GrazeSink {
    fn notify_grazing(&mut self);
}

/// Capability set shared by all transient moveable entities.
pub trait Moveable {
    /// Current position
    fn pos(&self) -> Vec2;

    /// Advance motion/internal state by `dt` seconds. Never decides removal.
    fn update(&mut self, dt: f32);

    /// Pure collision predicate against the player's hit circle.
    fn is_colliding(&self, player: &impl Player) -> bool;

    /// Variant-specific collision side effect. Invoked at most once, and
    /// only when the entity is about to be removed.
    fn on_collision(&self, player: &mut impl Player);

    /// Reduce remaining lifetime by `dt`; true when it has just run out.
    fn decrement_life(&mut self, dt: f32) -> bool;

    /// Draw call, issued only for entities that survive the frame.
    fn render(&self, batch: &mut impl RenderBatch);
}

/// Circle-vs-circle overlap test shared by bullets and items.
#[inline]
pub(crate) fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    a.distance_squared(b) < r * r
}
