use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata attached to an award. Only `xp` and `label` matter to this
/// crate; the rest is whatever the hosting service wants to carry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AchievementPayload {
    pub xp: u32,
    pub label: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub payload: AchievementPayload,
    pub awarded_at: DateTime<Utc>,
}

/// Consumed achievement/XP service. The contract callers rely on: awarding
/// the same id twice never duplicates the reward. `award` returns whether a
/// new achievement was recorded.
pub trait AchievementStore {
    fn get(&self, id: &str) -> Option<&Achievement>;
    fn award(&mut self, id: &str, payload: AchievementPayload) -> bool;
}

/// In-process implementation; the real backing service lives outside this
/// crate.
#[derive(Debug, Default)]
pub struct MemoryAchievements {
    entries: HashMap<String, Achievement>,
}

impl MemoryAchievements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_xp(&self) -> u32 {
        self.entries.values().map(|a| a.payload.xp).sum()
    }
}

impl AchievementStore for MemoryAchievements {
    fn get(&self, id: &str) -> Option<&Achievement> {
        self.entries.get(id)
    }

    fn award(&mut self, id: &str, payload: AchievementPayload) -> bool {
        if self.entries.contains_key(id) {
            return false;
        }
        self.entries.insert(
            id.to_string(),
            Achievement {
                id: id.to_string(),
                payload,
                awarded_at: Utc::now(),
            },
        );
        true
    }
}
