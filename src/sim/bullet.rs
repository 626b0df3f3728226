//! Projectile variants, templates, and motion state
//!
//! Each projectile behavior is a closed variant tagged by [`BulletKind`].
//! Templates are immutable serde descriptors; the recycling pool is keyed by
//! the kind tag, so a recycled bullet must be re-initialized with
//! [`Bullet::init`] before it re-enters play.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::moveable::{Moveable, Player, RenderBatch, SpriteId, circles_overlap};
use crate::{angle_to_dir, normalize_angle, perp};

/// Identity tag for a projectile variant. Pooling is partitioned by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    /// Constant velocity along the spawn heading
    Straight,
    /// Speed ramps between a min and max
    Accel,
    /// Sinusoidal sway perpendicular to the travel line
    Wave,
    /// Heading rotates at a fixed rate
    Turn,
    /// Seeded per-frame heading jitter
    Flaky,
}

impl BulletKind {
    /// Every variant, in dense-index order
    pub const ALL: [BulletKind; 5] = [
        BulletKind::Straight,
        BulletKind::Accel,
        BulletKind::Wave,
        BulletKind::Turn,
        BulletKind::Flaky,
    ];

    /// Number of variants
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index for array-keyed pooling
    pub fn index(self) -> usize {
        match self {
            BulletKind::Straight => 0,
            BulletKind::Accel => 1,
            BulletKind::Wave => 2,
            BulletKind::Turn => 3,
            BulletKind::Flaky => 4,
        }
    }
}

/// Per-variant motion parameters, embedded in a template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionSpec {
    Straight,
    Accel {
        /// Speed change per second (negative to decelerate)
        accel: f32,
        min_speed: f32,
        max_speed: f32,
    },
    Wave {
        /// Lateral sway amplitude in world units
        amplitude: f32,
        /// Sway frequency in radians per second
        frequency: f32,
    },
    Turn {
        /// Heading change in radians per second
        turn_rate: f32,
    },
    Flaky {
        /// Max heading jitter in radians per second
        jitter: f32,
        /// RNG seed; re-init reseeds so recycled bullets replay identically
        seed: u64,
    },
}

impl MotionSpec {
    /// The variant tag this spec instantiates
    pub fn kind(&self) -> BulletKind {
        match self {
            MotionSpec::Straight => BulletKind::Straight,
            MotionSpec::Accel { .. } => BulletKind::Accel,
            MotionSpec::Wave { .. } => BulletKind::Wave,
            MotionSpec::Turn { .. } => BulletKind::Turn,
            MotionSpec::Flaky { .. } => BulletKind::Flaky,
        }
    }
}

/// Runtime motion state for one live bullet
#[derive(Debug, Clone)]
enum MotionState {
    Straight,
    Accel {
        accel: f32,
        min_speed: f32,
        max_speed: f32,
    },
    Wave {
        amplitude: f32,
        frequency: f32,
        phase: f32,
    },
    Turn {
        turn_rate: f32,
    },
    Flaky {
        jitter: f32,
        rng: Pcg32,
    },
}

impl MotionState {
    fn from_spec(spec: MotionSpec) -> Self {
        match spec {
            MotionSpec::Straight => MotionState::Straight,
            MotionSpec::Accel {
                accel,
                min_speed,
                max_speed,
            } => MotionState::Accel {
                accel,
                min_speed,
                max_speed,
            },
            MotionSpec::Wave {
                amplitude,
                frequency,
            } => MotionState::Wave {
                amplitude,
                frequency,
                phase: 0.0,
            },
            MotionSpec::Turn { turn_rate } => MotionState::Turn { turn_rate },
            MotionSpec::Flaky { jitter, seed } => MotionState::Flaky {
                jitter,
                rng: Pcg32::seed_from_u64(seed),
            },
        }
    }

    fn kind(&self) -> BulletKind {
        match self {
            MotionState::Straight => BulletKind::Straight,
            MotionState::Accel { .. } => BulletKind::Accel,
            MotionState::Wave { .. } => BulletKind::Wave,
            MotionState::Turn { .. } => BulletKind::Turn,
            MotionState::Flaky { .. } => BulletKind::Flaky,
        }
    }
}

/// Immutable spawn descriptor for a projectile variant.
///
/// Position and heading are supplied at spawn time; everything else lives in
/// the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletTemplate {
    pub motion: MotionSpec,
    /// Initial speed in world units per second
    pub speed: f32,
    /// Lifetime in seconds
    pub life: f32,
    /// Hit circle radius
    pub radius: f32,
    /// Near-miss circle radius; wider than `radius`
    pub graze_radius: f32,
    /// Damage applied to the player on collision
    pub damage: f32,
    pub sprite: SpriteId,
}

impl BulletTemplate {
    /// Variant identity used to pick the recycling free list
    pub fn kind(&self) -> BulletKind {
        self.motion.kind()
    }

    /// Factory path for a pool miss: construct a fresh, initialized bullet.
    pub fn spawn(&self, x: f32, y: f32, angle: f32) -> Bullet {
        let mut bullet = Bullet {
            pos: Vec2::ZERO,
            angle: 0.0,
            speed: 0.0,
            life: 0.0,
            radius: 0.0,
            graze_radius: 0.0,
            damage: 0.0,
            sprite: self.sprite,
            motion: MotionState::Straight,
        };
        bullet.init(self, x, y, angle);
        bullet
    }
}

/// One live (or pooled) projectile instance
#[derive(Debug, Clone)]
pub struct Bullet {
    pos: Vec2,
    angle: f32,
    speed: f32,
    life: f32,
    radius: f32,
    graze_radius: f32,
    damage: f32,
    sprite: SpriteId,
    motion: MotionState,
}

impl Bullet {
    /// Reset every mutable field from a template and spawn parameters.
    ///
    /// A recycled instance must be indistinguishable from a fresh one, so
    /// this also rewinds variant state (wave phase, jitter RNG).
    pub fn init(&mut self, template: &BulletTemplate, x: f32, y: f32, angle: f32) {
        self.pos = Vec2::new(x, y);
        self.angle = normalize_angle(angle);
        self.speed = template.speed;
        self.life = template.life;
        self.radius = template.radius;
        self.graze_radius = template.graze_radius;
        self.damage = template.damage;
        self.sprite = template.sprite;
        self.motion = MotionState::from_spec(template.motion);
    }

    /// Variant identity used to pick the recycling free list
    pub fn kind(&self) -> BulletKind {
        self.motion.kind()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Near-miss test: inside the graze circle counts, the loop guarantees
    /// the bullet was not colliding this frame.
    pub fn is_grazing(&self, player: &impl Player) -> bool {
        circles_overlap(self.pos, self.graze_radius, player.pos(), player.hit_radius())
    }
}

impl Moveable for Bullet {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn update(&mut self, dt: f32) {
        match &mut self.motion {
            MotionState::Straight => {
                self.pos += angle_to_dir(self.angle) * self.speed * dt;
            }
            MotionState::Accel {
                accel,
                min_speed,
                max_speed,
            } => {
                self.speed = (self.speed + *accel * dt).clamp(*min_speed, *max_speed);
                self.pos += angle_to_dir(self.angle) * self.speed * dt;
            }
            MotionState::Wave {
                amplitude,
                frequency,
                phase,
            } => {
                let dir = angle_to_dir(self.angle);
                let old_phase = *phase;
                *phase += *frequency * dt;
                // Lateral displacement is the delta of the sine so the sway
                // stays centered on the travel line
                let lateral = *amplitude * (phase.sin() - old_phase.sin());
                self.pos += dir * self.speed * dt + perp(dir) * lateral;
            }
            MotionState::Turn { turn_rate } => {
                self.angle = normalize_angle(self.angle + *turn_rate * dt);
                self.pos += angle_to_dir(self.angle) * self.speed * dt;
            }
            MotionState::Flaky { jitter, rng } => {
                let j = *jitter;
                self.angle = normalize_angle(self.angle + rng.random_range(-j..=j) * dt);
                self.pos += angle_to_dir(self.angle) * self.speed * dt;
            }
        }
    }

    fn is_colliding(&self, player: &impl Player) -> bool {
        circles_overlap(self.pos, self.radius, player.pos(), player.hit_radius())
    }

    fn on_collision(&self, player: &mut impl Player) {
        player.on_bullet_hit(self.damage);
    }

    fn decrement_life(&mut self, dt: f32) -> bool {
        self.life -= dt;
        self.life <= 0.0
    }

    fn render(&self, batch: &mut impl RenderBatch) {
        batch.draw(self.sprite, self.pos, self.angle);
    }
}
