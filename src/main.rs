//! Headless demo: runs the barrage simulation at a fixed timestep and logs
//! per-second activity so the recycling behavior is visible without a
//! rendering backend.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use barrage::consts::SIM_DT;
use barrage::sim::{GrazeSink, Item, PickupEffect, Player, RenderBatch, SpriteId};
use barrage::{Arsenal, MoveableManager};

/// Render batch that only counts draw calls
#[derive(Default)]
struct NullBatch {
    draws: u64,
}

impl RenderBatch for NullBatch {
    fn draw(&mut self, _sprite: SpriteId, _pos: Vec2, _angle: f32) {
        self.draws += 1;
    }
}

#[derive(Default)]
struct DemoScreen {
    grazes: u64,
}

impl GrazeSink for DemoScreen {
    fn notify_grazing(&mut self) {
        self.grazes += 1;
    }
}

/// Scripted player sweeping back and forth along the x axis
struct DemoPlayer {
    pos: Vec2,
    magnet: bool,
    hits: u64,
    coins: u64,
    score: u64,
}

impl DemoPlayer {
    fn new() -> Self {
        Self {
            pos: Vec2::new(0.0, -200.0),
            magnet: false,
            hits: 0,
            coins: 0,
            score: 0,
        }
    }
}

impl Player for DemoPlayer {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn hit_radius(&self) -> f32 {
        6.0
    }

    fn magnet_active(&self) -> bool {
        self.magnet
    }

    fn on_bullet_hit(&mut self, _damage: f32) {
        self.hits += 1;
    }

    fn on_pickup(&mut self, effect: PickupEffect) {
        match effect {
            PickupEffect::Coins(v) => self.coins += u64::from(v),
            PickupEffect::Score(v) => self.score += u64::from(v),
            PickupEffect::Heal(_) | PickupEffect::FreezeCharge(_) => {}
        }
    }
}

fn main() {
    env_logger::init();

    let arsenal = Arsenal::standard();
    let mut manager = MoveableManager::new();
    let mut batch = NullBatch::default();
    let mut screen = DemoScreen::default();
    let mut player = DemoPlayer::new();
    let mut rng = Pcg32::seed_from_u64(7);

    let names: Vec<&str> = arsenal.names().collect();
    let seconds = 20u32;
    let frames = seconds * 120;

    for frame in 0..frames {
        // Sweep the player and toggle magnet mode every 4 seconds
        let t = frame as f32 * SIM_DT;
        player.pos.x = (t * 0.6).sin() * 250.0;
        player.magnet = (frame / 480) % 2 == 1;

        // Ring burst every half second, coins every 2 seconds
        if frame % 60 == 0 {
            let name = names[(frame as usize / 60) % names.len()];
            if let Some(template) = arsenal.get(name) {
                for i in 0..12 {
                    let angle = i as f32 * std::f32::consts::TAU / 12.0;
                    manager.add_bullet(template, 0.0, 0.0, angle);
                }
            }
        }
        if frame % 240 == 0 {
            let x = rng.random_range(-200.0..200.0);
            manager.add_item(Item::coin(5, Vec2::new(x, 100.0), SpriteId(9)));
        }

        manager.tick(&mut batch, &mut player, &mut screen, SIM_DT);

        if frame % 120 == 119 {
            log::info!(
                "t={:>2}s bullets={:<3} items={:<2} pooled={:<3} grazes={} hits={} coins={}",
                (frame + 1) / 120,
                manager.bullet_count(),
                manager.item_count(),
                manager.pooled_total(),
                screen.grazes,
                player.hits,
                player.coins,
            );
        }
    }

    log::info!(
        "done: {} draw calls, {} bullets still active, {} pooled, score {}",
        batch.draws,
        manager.bullet_count(),
        manager.pooled_total(),
        player.score,
    );
}
