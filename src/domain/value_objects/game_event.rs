//! Game events - The structured outcome of a player action
//!
//! These are the contracts the browser client renders. The model is asked to reply
//! in exactly this shape; decoding is forgiving about how individual fields are
//! spelled (see [`lenient`](super::lenient)) but the shape itself is fixed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// Character attribute a check can roll against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Strength,
    Agility,
    Intelligence,
    Luck,
}

impl Stat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Agility => "agility",
            Self::Intelligence => "intelligence",
            Self::Luck => "luck",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "agility" => Ok(Self::Agility),
            "intelligence" => Ok(Self::Intelligence),
            "luck" => Ok(Self::Luck),
            other => Err(format!("unknown stat: {}", other)),
        }
    }
}

/// How threatening the current scene is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    #[default]
    Safe,
    Caution,
    Danger,
}

impl DangerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DangerLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "safe" => Ok(Self::Safe),
            "caution" => Ok(Self::Caution),
            "danger" => Ok(Self::Danger),
            other => Err(format!("unknown danger level: {}", other)),
        }
    }
}

/// A line spoken by an NPC, kept apart from the narration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueLine {
    #[serde(deserialize_with = "lenient::text")]
    pub speaker: String,
    #[serde(deserialize_with = "lenient::text")]
    pub text: String,
}

impl DialogueLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Dialogue list where a line may be bare text with no speaker
fn dialogue_list<'de, D>(deserializer: D) -> Result<Vec<DialogueLine>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::values(deserializer)?
        .into_iter()
        .map(|entry| match entry {
            Value::Object(_) => serde_json::from_value(entry).unwrap_or_default(),
            Value::String(text) => DialogueLine::new("", text),
            other => DialogueLine::new("", other.to_string()),
        })
        .collect())
}

/// Outcome of a player action, as narrated by the game master
///
/// Optional fields with no neutral value (`roll_type`, `roll_difficulty`,
/// `npc_present`, `danger_level`, `image_prompt`) are serialized as `null` when the
/// model left them out. Flags, counters and lists fall back to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameEvent {
    #[serde(deserialize_with = "lenient::text")]
    pub narration: String,
    #[serde(deserialize_with = "dialogue_list")]
    pub dialogues: Vec<DialogueLine>,
    #[serde(deserialize_with = "lenient::flag")]
    pub requires_roll: bool,
    #[serde(deserialize_with = "lenient::optional_enum")]
    pub roll_type: Option<Stat>,
    #[serde(deserialize_with = "lenient::optional_int")]
    pub roll_difficulty: Option<i64>,
    #[serde(deserialize_with = "lenient::non_negative_int")]
    pub damage_taken: i64,
    #[serde(deserialize_with = "lenient::text_list")]
    pub items_gained: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub items_lost: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub npc_present: Option<String>,
    #[serde(deserialize_with = "lenient::optional_enum")]
    pub danger_level: Option<DangerLevel>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub image_prompt: Option<String>,
    /// Keys the model added beyond the contract
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameEvent {
    /// Neutral event returned when narration could not be generated
    ///
    /// Keeps the game loop moving: nothing happens, nobody speaks, no roll is asked
    /// for and the scene is marked safe.
    pub fn placeholder() -> Self {
        Self {
            narration: "A strange stillness settles over the scene. Nothing seems to change."
                .to_string(),
            danger_level: Some(DangerLevel::Safe),
            ..Self::default()
        }
    }
}

/// Narration of a resolved roll
///
/// A subset of [`GameEvent`]: the roll has already happened, so there is no roll
/// request, lost items or NPC tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollNarration {
    #[serde(deserialize_with = "lenient::text")]
    pub narration: String,
    #[serde(deserialize_with = "dialogue_list")]
    pub dialogues: Vec<DialogueLine>,
    #[serde(deserialize_with = "lenient::non_negative_int")]
    pub damage_taken: i64,
    #[serde(deserialize_with = "lenient::text_list")]
    pub items_gained: Vec<String>,
    #[serde(deserialize_with = "lenient::optional_enum")]
    pub danger_level: Option<DangerLevel>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub image_prompt: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RollNarration {
    /// Neutral narration returned when the outcome could not be described
    pub fn placeholder() -> Self {
        Self {
            narration: "The result of the roll takes effect.".to_string(),
            danger_level: Some(DangerLevel::Safe),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_event_decodes() {
        let event: GameEvent = serde_json::from_value(serde_json::json!({
            "narration": "The door groans open.",
            "dialogues": [{ "speaker": "Maren", "text": "Quietly now." }],
            "requires_roll": true,
            "roll_type": "Agility",
            "roll_difficulty": "14",
            "damage_taken": 0,
            "items_gained": ["rusty key"],
            "items_lost": [],
            "npc_present": "Maren",
            "danger_level": "caution",
            "image_prompt": "medieval fantasy, a crypt door, cinematic lighting"
        }))
        .unwrap();

        assert!(event.requires_roll);
        assert_eq!(event.roll_type, Some(Stat::Agility));
        assert_eq!(event.roll_difficulty, Some(14));
        assert_eq!(event.dialogues, vec![DialogueLine::new("Maren", "Quietly now.")]);
        assert_eq!(event.danger_level, Some(DangerLevel::Caution));
        assert!(event.extra.is_empty());
    }

    #[test]
    fn test_missing_optional_fields_serialize_as_null() {
        let event: GameEvent =
            serde_json::from_value(serde_json::json!({ "narration": "Wind." })).unwrap();
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["dialogues"], serde_json::json!([]));
        assert_eq!(value["damage_taken"], 0);
        assert_eq!(value["requires_roll"], false);
        assert!(value["roll_type"].is_null());
        assert!(value["danger_level"].is_null());
        assert!(value["image_prompt"].is_null());
    }

    #[test]
    fn test_unknown_roll_type_is_dropped() {
        let event: GameEvent = serde_json::from_value(serde_json::json!({
            "requires_roll": false,
            "roll_type": "charisma"
        }))
        .unwrap();
        assert_eq!(event.roll_type, None);
    }

    #[test]
    fn test_placeholder_is_neutral() {
        let value = serde_json::to_value(GameEvent::placeholder()).unwrap();
        assert_eq!(value["dialogues"], serde_json::json!([]));
        assert_eq!(value["danger_level"], "safe");
        assert_eq!(value["damage_taken"], 0);
        assert_eq!(value["requires_roll"], false);
        assert!(value["roll_type"].is_null());
        assert!(value["roll_difficulty"].is_null());
        assert!(value["image_prompt"].is_null());
    }

    #[test]
    fn test_roll_narration_keeps_only_its_fields() {
        let value = serde_json::to_value(RollNarration::placeholder()).unwrap();
        assert!(value.get("requires_roll").is_none());
        assert!(value.get("items_lost").is_none());
        assert_eq!(value["danger_level"], "safe");
    }

    #[test]
    fn test_single_values_become_lists() {
        let event: GameEvent = serde_json::from_value(serde_json::json!({
            "narration": "The vault opens.",
            "dialogues": ["Halt!", null, { "speaker": "Guard", "text": "Who goes there?" }],
            "requires_roll": "true",
            "items_gained": "sword",
            "items_lost": [{ "name": "torch" }]
        }))
        .unwrap();

        assert_eq!(
            event.dialogues,
            vec![
                DialogueLine::new("", "Halt!"),
                DialogueLine::new("Guard", "Who goes there?")
            ]
        );
        assert!(event.requires_roll);
        assert_eq!(event.items_gained, vec!["sword"]);
        assert_eq!(event.items_lost, vec!["torch"]);

        let narration: RollNarration = serde_json::from_value(serde_json::json!({
            "dialogues": "Well struck.",
            "items_gained": "coin purse"
        }))
        .unwrap();
        assert_eq!(narration.dialogues[0].text, "Well struck.");
        assert_eq!(narration.items_gained, vec!["coin purse"]);
    }
}
