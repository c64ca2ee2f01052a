//! Character entity - The player's character sheet

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::lenient;

/// Core attributes of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub hp: i64,
    #[serde(rename = "maxHp")]
    pub max_hp: i64,
    pub strength: i64,
    pub agility: i64,
    pub intelligence: i64,
    pub luck: i64,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            hp: 100,
            max_hp: 100,
            strength: 10,
            agility: 10,
            intelligence: 10,
            luck: 10,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub class: String,
    pub stats: StatBlock,
    #[serde(deserialize_with = "lenient::text_list")]
    pub inventory: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub background: String,
}

impl Character {
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.inventory.push(item.into());
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }
}
