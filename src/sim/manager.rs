//! Per-frame orchestration of all transient moveables
//!
//! Owns the active bullet and item collections plus the recycling pool, and
//! drives the update / collide / expire / render pipeline once per frame.
//! Bullets are recycled through the pool on removal; items are discarded.
//!
//! Removal uses index traversal with `swap_remove`: the element swapped into
//! the current slot is stepped next, so every entity is processed exactly
//! once per frame. Survivor order across frames is not preserved.

use log::debug;

use super::bullet::{Bullet, BulletKind, BulletTemplate};
use super::item::Item;
use super::moveable::{GrazeSink, Moveable, Player, RenderBatch};
use super::pool::BulletPool;

/// Owner of all live bullets and items on screen
#[derive(Debug, Default)]
pub struct MoveableManager {
    bullets: Vec<Bullet>,
    items: Vec<Item>,
    pool: BulletPool,
}

impl MoveableManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a bullet from a template at `(x, y)` with heading `angle`.
    ///
    /// Reuses a pooled instance of the template's variant when one is
    /// available; otherwise constructs a fresh one. Either way the bullet is
    /// fully re-initialized, so callers cannot tell the difference.
    pub fn add_bullet(&mut self, template: &BulletTemplate, x: f32, y: f32, angle: f32) {
        let bullet = match self.pool.acquire(template.kind()) {
            Some(mut recycled) => {
                recycled.init(template, x, y, angle);
                recycled
            }
            None => {
                debug!("constructing new {:?} bullet", template.kind());
                template.spawn(x, y, angle)
            }
        };
        self.bullets.push(bullet);
    }

    /// Add a fully-constructed item. Items are never pooled.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Advance, collide, expire, and render everything for one frame.
    ///
    /// Per entity, collision wins over expiry, expiry wins over rendering,
    /// and a removed entity does nothing else this frame: no render, no
    /// graze test, no magnet toggle.
    pub fn tick(
        &mut self,
        batch: &mut impl RenderBatch,
        player: &mut impl Player,
        screen: &mut impl GrazeSink,
        dt: f32,
    ) {
        self.tick_bullets(batch, player, screen, dt);
        self.tick_items(batch, player, dt);
    }

    fn tick_bullets(
        &mut self,
        batch: &mut impl RenderBatch,
        player: &mut impl Player,
        screen: &mut impl GrazeSink,
        dt: f32,
    ) {
        let mut i = 0;
        while i < self.bullets.len() {
            self.bullets[i].update(dt);

            if self.bullets[i].is_colliding(player) {
                self.bullets[i].on_collision(player);
                let retired = self.bullets.swap_remove(i);
                self.pool.release(retired);
            } else if self.bullets[i].decrement_life(dt) {
                let retired = self.bullets.swap_remove(i);
                self.pool.release(retired);
            } else {
                self.bullets[i].render(batch);
                if self.bullets[i].is_grazing(player) {
                    screen.notify_grazing();
                }
                i += 1;
            }
        }
    }

    fn tick_items(&mut self, batch: &mut impl RenderBatch, player: &mut impl Player, dt: f32) {
        let mut i = 0;
        while i < self.items.len() {
            self.items[i].update(dt);

            if self.items[i].is_colliding(player) {
                self.items[i].on_collision(player);
                self.items.swap_remove(i);
            } else if self.items[i].decrement_life(dt) {
                self.items.swap_remove(i);
            } else {
                self.items[i].render(batch);
                // Magnet toggle is frame-local: re-evaluated for every
                // surviving magnetic item, never left sticky
                if self.items[i].is_magnetic() {
                    if player.magnet_active() && self.items[i].is_near(player) {
                        self.items[i].start_attraction(player.pos());
                    } else {
                        self.items[i].stop_attraction();
                    }
                }
                i += 1;
            }
        }
    }

    /// Number of active bullets
    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    /// Number of active items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of retired bullets of one variant waiting for reuse
    pub fn pooled_count(&self, kind: BulletKind) -> usize {
        self.pool.len(kind)
    }

    /// Retired bullets across all variants
    pub fn pooled_total(&self) -> usize {
        self.pool.total_len()
    }

    /// Active bullets, for HUD/debug readouts
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Active items, for HUD/debug readouts
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
