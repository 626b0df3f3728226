//! Collectible items, including the magnetic coin
//!
//! Items are never pooled: always freshly constructed, permanently discarded
//! on pickup or expiry. Magnetic items chase the player while magnet mode is
//! on and they are inside their attraction radius; the manager re-evaluates
//! that toggle every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::moveable::{Moveable, Player, RenderBatch, SpriteId, circles_overlap};
use crate::consts::{
    COIN_ATTRACT_RADIUS, COIN_PULL_SPEED, ITEM_FALL_SPEED, ITEM_LIFE, ITEM_RADIUS,
};

/// What a collected item grants the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PickupEffect {
    Score(u32),
    Heal(f32),
    Coins(u32),
    /// Charges the player's time-freeze meter
    FreezeCharge(f32),
}

/// Closed item variant tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemKind {
    /// Drifts until collected; no extra behavior
    Plain { effect: PickupEffect },
    /// Chases the player while magnet mode is on and in range
    Magnetic {
        value: u32,
        attract_radius: f32,
        pull_speed: f32,
        attracting: bool,
    },
}

/// One live collectible
#[derive(Debug, Clone)]
pub struct Item {
    pos: Vec2,
    vel: Vec2,
    life: f32,
    radius: f32,
    sprite: SpriteId,
    kind: ItemKind,
}

impl Item {
    /// A plain drifting collectible
    pub fn plain(effect: PickupEffect, pos: Vec2, sprite: SpriteId) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, -ITEM_FALL_SPEED),
            life: ITEM_LIFE,
            radius: ITEM_RADIUS,
            sprite,
            kind: ItemKind::Plain { effect },
        }
    }

    /// A magnetic coin worth `value`
    pub fn coin(value: u32, pos: Vec2, sprite: SpriteId) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, -ITEM_FALL_SPEED),
            life: ITEM_LIFE,
            radius: ITEM_RADIUS,
            sprite,
            kind: ItemKind::Magnetic {
                value,
                attract_radius: COIN_ATTRACT_RADIUS,
                pull_speed: COIN_PULL_SPEED,
                attracting: false,
            },
        }
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// True for items that can be attracted by magnet mode
    pub fn is_magnetic(&self) -> bool {
        matches!(self.kind, ItemKind::Magnetic { .. })
    }

    /// Proximity test against the attraction radius. Always false for
    /// non-magnetic items.
    pub fn is_near(&self, player: &impl Player) -> bool {
        match self.kind {
            ItemKind::Magnetic { attract_radius, .. } => {
                circles_overlap(self.pos, attract_radius, player.pos(), player.hit_radius())
            }
            ItemKind::Plain { .. } => false,
        }
    }

    /// Point the velocity at the player for this frame
    pub fn start_attraction(&mut self, player_pos: Vec2) {
        if let ItemKind::Magnetic {
            pull_speed,
            ref mut attracting,
            ..
        } = self.kind
        {
            let dir = (player_pos - self.pos).normalize_or_zero();
            self.vel = dir * pull_speed;
            *attracting = true;
        }
    }

    /// Restore the idle drift. Must be called every frame the toggle fails;
    /// attraction is not sticky.
    pub fn stop_attraction(&mut self) {
        if let ItemKind::Magnetic {
            ref mut attracting, ..
        } = self.kind
        {
            self.vel = Vec2::new(0.0, -ITEM_FALL_SPEED);
            *attracting = false;
        }
    }

    /// Whether the item chased the player this frame
    pub fn is_attracting(&self) -> bool {
        matches!(self.kind, ItemKind::Magnetic { attracting: true, .. })
    }
}

impl Moveable for Item {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    fn is_colliding(&self, player: &impl Player) -> bool {
        circles_overlap(self.pos, self.radius, player.pos(), player.hit_radius())
    }

    fn on_collision(&self, player: &mut impl Player) {
        let effect = match self.kind {
            ItemKind::Plain { effect } => effect,
            ItemKind::Magnetic { value, .. } => PickupEffect::Coins(value),
        };
        player.on_pickup(effect);
    }

    fn decrement_life(&mut self, dt: f32) -> bool {
        self.life -= dt;
        self.life <= 0.0
    }

    fn render(&self, batch: &mut impl RenderBatch) {
        batch.draw(self.sprite, self.pos, 0.0);
    }
}
