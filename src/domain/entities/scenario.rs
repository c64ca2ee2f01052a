//! Scenario entity - The generated game-world template
//!
//! A scenario is produced once per game by the scenario generator and then held by
//! the browser client, which sends it back with every action.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::lenient;

/// A non-player character introduced by the scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Npc {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub role: String,
    #[serde(deserialize_with = "lenient::text")]
    pub personality: String,
}

impl Npc {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// NPC list where an entry may be a bare name instead of an object
fn npc_list<'de, D>(deserializer: D) -> Result<Vec<Npc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::values(deserializer)?
        .into_iter()
        .map(|entry| match entry {
            Value::Object(_) => serde_json::from_value(entry).unwrap_or_default(),
            Value::String(name) => Npc::named(name),
            other => Npc::named(other.to_string()),
        })
        .collect())
}

/// The world a game is played in
///
/// Every field defaults when absent so partially filled scenarios from either the
/// model or the client still decode. Keys this type does not know about are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub setting: String,
    #[serde(deserialize_with = "lenient::text")]
    pub goal: String,
    #[serde(deserialize_with = "lenient::text")]
    pub starting_scene: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "npc_list")]
    pub npcs: Vec<Npc>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub threats: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub items: Vec<String>,
    /// Genre label attached by the client, used for image prompts
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Scenario {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_setting(mut self, setting: impl Into<String>) -> Self {
        self.setting = setting.into();
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    pub fn with_threat(mut self, threat: impl Into<String>) -> Self {
        self.threats.push(threat.into());
        self
    }

    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.npcs.push(npc);
        self
    }
}
