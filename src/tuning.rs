//! Data-driven bullet template registry
//!
//! Spawn patterns are balanced from data, not code: an [`Arsenal`] maps
//! template names to [`BulletTemplate`] descriptors and round-trips through
//! JSON so designers can edit it without recompiling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{BULLET_LIFE, BULLET_RADIUS, GRAZE_RADIUS};
use crate::sim::bullet::{BulletTemplate, MotionSpec};
use crate::sim::moveable::SpriteId;

/// Named collection of bullet templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arsenal {
    templates: BTreeMap<String, BulletTemplate>,
}

impl Arsenal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in template set covering every projectile variant
    pub fn standard() -> Self {
        let base = |motion, speed, sprite| BulletTemplate {
            motion,
            speed,
            life: BULLET_LIFE,
            radius: BULLET_RADIUS,
            graze_radius: GRAZE_RADIUS,
            damage: 1.0,
            sprite: SpriteId(sprite),
        };

        let mut arsenal = Self::new();
        arsenal.insert("straight", base(MotionSpec::Straight, 180.0, 1));
        arsenal.insert(
            "lance",
            base(
                MotionSpec::Accel {
                    accel: 240.0,
                    min_speed: 60.0,
                    max_speed: 420.0,
                },
                60.0,
                2,
            ),
        );
        arsenal.insert(
            "sine",
            base(
                MotionSpec::Wave {
                    amplitude: 18.0,
                    frequency: 6.0,
                },
                140.0,
                3,
            ),
        );
        arsenal.insert(
            "curver",
            base(MotionSpec::Turn { turn_rate: 0.8 }, 160.0, 4),
        );
        arsenal.insert(
            "drunkard",
            base(
                MotionSpec::Flaky {
                    jitter: 3.0,
                    seed: 0x5eed,
                },
                120.0,
                5,
            ),
        );
        arsenal
    }

    pub fn insert(&mut self, name: &str, template: BulletTemplate) {
        self.templates.insert(name.to_owned(), template);
    }

    pub fn get(&self, name: &str) -> Option<&BulletTemplate> {
        self.templates.get(name)
    }

    /// Template names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parse an arsenal from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let arsenal: Self = serde_json::from_str(json)?;
        log::info!("loaded arsenal with {} templates", arsenal.len());
        Ok(arsenal)
    }

    /// Serialize to pretty JSON for editing
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bullet::BulletKind;

    #[test]
    fn standard_arsenal_covers_every_variant() {
        let arsenal = Arsenal::standard();
        let mut kinds: Vec<BulletKind> = arsenal
            .names()
            .filter_map(|n| arsenal.get(n))
            .map(BulletTemplate::kind)
            .collect();
        kinds.sort_by_key(|k| k.index());
        kinds.dedup();
        assert_eq!(kinds.len(), BulletKind::COUNT);
    }

    #[test]
    fn json_round_trip_preserves_templates() {
        let arsenal = Arsenal::standard();
        let json = arsenal.to_json().expect("serialize");
        let restored = Arsenal::from_json(&json).expect("parse");
        assert_eq!(restored.len(), arsenal.len());
        assert_eq!(restored.get("sine"), arsenal.get("sine"));
    }

    #[test]
    fn from_json_accepts_hand_written_templates() {
        let json = r#"{
            "templates": {
                "pellet": {
                    "motion": "Straight",
                    "speed": 200.0,
                    "life": 6.0,
                    "radius": 4.0,
                    "graze_radius": 20.0,
                    "damage": 0.5,
                    "sprite": 7
                }
            }
        }"#;
        let arsenal = Arsenal::from_json(json).expect("parse");
        let pellet = arsenal.get("pellet").expect("pellet template");
        assert_eq!(pellet.kind(), BulletKind::Straight);
        assert_eq!(pellet.speed, 200.0);
    }

    #[test]
    fn malformed_json_surfaces_the_error() {
        assert!(Arsenal::from_json("{ not json").is_err());
    }
}
