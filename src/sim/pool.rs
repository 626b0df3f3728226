//! Per-variant recycling pool for retired bullets
//!
//! Bullets are cheap to reuse but heterogeneous in behavior, so the pool is
//! partitioned by [`BulletKind`]: a dense array of free lists indexed by the
//! variant tag. Lists drain last-in-first-out. The pool is private to the
//! manager; a bullet enters a free list only after it has been removed from
//! the active collection, and it is moved by value both ways, so an instance
//! can never be active and pooled at once.

use log::trace;

use super::bullet::{Bullet, BulletKind};

/// Free lists of retired bullets, one per variant
#[derive(Debug, Default)]
pub struct BulletPool {
    free: [Vec<Bullet>; BulletKind::COUNT],
}

impl BulletPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the most recently retired bullet of `kind`, if any.
    ///
    /// A miss has no side effect; the caller falls back to the template
    /// factory. The returned bullet still carries stale state and must be
    /// re-initialized before use.
    pub fn acquire(&mut self, kind: BulletKind) -> Option<Bullet> {
        let bullet = self.free[kind.index()].pop();
        if bullet.is_some() {
            trace!("recycled {:?} bullet from pool", kind);
        }
        bullet
    }

    /// Return a retired bullet to the free list keyed by its own kind.
    pub fn release(&mut self, bullet: Bullet) {
        self.free[bullet.kind().index()].push(bullet);
    }

    /// Number of pooled bullets of one variant
    pub fn len(&self, kind: BulletKind) -> usize {
        self.free[kind.index()].len()
    }

    /// Number of pooled bullets across all variants
    pub fn total_len(&self) -> usize {
        self.free.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.free.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bullet::{BulletTemplate, MotionSpec};
    use crate::sim::moveable::{Moveable, SpriteId};

    fn template(motion: MotionSpec) -> BulletTemplate {
        BulletTemplate {
            motion,
            speed: 100.0,
            life: 5.0,
            radius: 5.0,
            graze_radius: 20.0,
            damage: 1.0,
            sprite: SpriteId(0),
        }
    }

    #[test]
    fn acquire_on_empty_pool_is_a_miss() {
        let mut pool = BulletPool::new();
        assert!(pool.acquire(BulletKind::Straight).is_none());
        assert!(pool.is_empty());
    }

    #[test]
    fn release_then_acquire_round_trips_by_kind() {
        let mut pool = BulletPool::new();
        pool.release(template(MotionSpec::Straight).spawn(0.0, 0.0, 0.0));
        pool.release(template(MotionSpec::Turn { turn_rate: 1.0 }).spawn(0.0, 0.0, 0.0));

        assert_eq!(pool.len(BulletKind::Straight), 1);
        assert_eq!(pool.len(BulletKind::Turn), 1);
        assert_eq!(pool.total_len(), 2);

        // Asking for one kind never drains another
        assert!(pool.acquire(BulletKind::Wave).is_none());
        let b = pool.acquire(BulletKind::Turn).expect("pooled Turn bullet");
        assert_eq!(b.kind(), BulletKind::Turn);
        assert_eq!(pool.len(BulletKind::Turn), 0);
        assert_eq!(pool.len(BulletKind::Straight), 1);
    }

    #[test]
    fn drain_order_is_lifo() {
        let mut pool = BulletPool::new();
        let t = template(MotionSpec::Straight);
        pool.release(t.spawn(1.0, 0.0, 0.0));
        pool.release(t.spawn(2.0, 0.0, 0.0));

        // Most recently retired comes back first
        let first = pool.acquire(BulletKind::Straight).unwrap();
        assert_eq!(first.pos().x, 2.0);
        let second = pool.acquire(BulletKind::Straight).unwrap();
        assert_eq!(second.pos().x, 1.0);
        assert!(pool.acquire(BulletKind::Straight).is_none());
    }
}
