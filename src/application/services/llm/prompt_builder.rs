//! Prompt building functions for LLM requests
//!
//! Every route pairs a system instruction (schema, tone and rules) with a user
//! prompt carrying the game state. Caller-supplied text is inserted verbatim.

use crate::domain::entities::{Character, Scenario};
use crate::domain::value_objects::{HistoryEntry, RollOutcome};

/// Number of most recent history entries included in an action prompt
pub const HISTORY_WINDOW: usize = 10;

/// Style keywords every scene image prompt must end with
pub const IMAGE_STYLE_SUFFIX: &str =
    "cinematic lighting, highly detailed, atmospheric, 8k, digital art";

/// The last [`HISTORY_WINDOW`] entries, oldest first
pub fn recent_history(history: &[HistoryEntry]) -> &[HistoryEntry] {
    &history[history.len().saturating_sub(HISTORY_WINDOW)..]
}

/// Render the recent history as labelled transcript lines
pub fn format_history(history: &[HistoryEntry]) -> String {
    recent_history(history)
        .iter()
        .map(|entry| format!("{}: {}", entry.role.label(), entry.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_image_prompt_rules(prompt: &mut String) {
    prompt.push_str("[IMAGE PROMPT RULES]\n");
    prompt.push_str("- Always write the image prompt in English.\n");
    prompt.push_str(
        "- Lead with the scenario's genre and era (e.g. medieval fantasy, cyberpunk, horror).\n",
    );
    prompt.push_str(&format!(
        "- Always end with these style keywords: \"{}\"\n",
        IMAGE_STYLE_SUFFIX
    ));
    prompt.push_str(
        "- When people appear, use either \"anime style\" or \"realistic style\" and keep that \
         choice for the whole scenario.\n\n",
    );
}

/// System instruction for generating a new scenario
pub fn scenario_instruction(language: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are a TRPG scenario writer.\n");
    prompt.push_str(
        "Using the theme the user provides, create an engaging tabletop role-playing scenario.\n",
    );
    prompt.push_str(&format!(
        "Write every title, description and name in {}.\n\n",
        language
    ));

    prompt.push_str(
        r#"The output must be JSON in exactly this format:
{
  "title": "Scenario title",
  "setting": "World description, 2-3 sentences",
  "goal": "The player's final objective",
  "starting_scene": "Vivid description of the opening scene, 3-4 sentences",
  "locations": ["Location 1", "Location 2", "Location 3", "Location 4", "Location 5"],
  "npcs": [
    {"name": "NPC name 1", "role": "Role", "personality": "Personality traits"},
    {"name": "NPC name 2", "role": "Role", "personality": "Personality traits"},
    {"name": "NPC name 3", "role": "Role", "personality": "Personality traits"}
  ],
  "threats": ["Threat 1", "Threat 2", "Threat 3"],
  "items": ["Obtainable item 1", "Item 2", "Item 3", "Item 4", "Item 5"]
}"#,
    );

    prompt
}

/// User prompt for generating a new scenario
pub fn scenario_prompt(theme: &str) -> String {
    format!(
        "Theme: {}\n\nCreate a TRPG scenario based on the theme above.",
        theme
    )
}

/// System instruction for narrating the result of a player action
pub fn game_master_instruction(language: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are the game master of a TRPG. Keep the player immersed.\n\n");
    prompt.push_str("IMPORTANT:\n");
    prompt.push_str(
        "1. Do not describe or repeat the player's action again. The player has already written it.\n",
    );
    prompt.push_str(
        "2. Describe only the result of the action, how NPCs react, and how the situation changes.\n",
    );
    prompt.push_str(
        "3. Always keep the scene description (narration) separate from NPC speech (dialogues).\n",
    );
    prompt.push_str(&format!(
        "4. Write narration and dialogue in {}.\n\n",
        language
    ));

    push_image_prompt_rules(&mut prompt);

    prompt.push_str(
        r#"The output must be JSON in exactly this format:
{
  "narration": "Result of the action and how the situation changes (3-5 sentences, never repeat the action)",
  "dialogues": [
    {"speaker": "NPC name", "text": "What the NPC says"},
    {"speaker": "NPC name 2", "text": "What the second NPC says"}
  ],
  "requires_roll": true or false,
  "roll_type": "Stat to roll when a check is needed (strength/agility/intelligence/luck), otherwise null",
  "roll_difficulty": "Check difficulty as a number between 8 and 18, otherwise null",
  "damage_taken": "Damage the player took (0 if none)",
  "items_gained": ["Items gained"],
  "items_lost": ["Items lost"],
  "npc_present": "Name of the NPC in the scene, or null",
  "danger_level": "One of safe/caution/danger",
  "image_prompt": "Genre and era + description of the current scene + style keywords (in English)"
}"#,
    );

    prompt
}

/// User prompt carrying the full game state for a player action
pub fn action_prompt(
    scenario: &Scenario,
    character: &Character,
    history: &[HistoryEntry],
    action: &str,
) -> String {
    let mut prompt = String::new();

    prompt.push_str("[SCENARIO]\n");
    prompt.push_str(&format!("Title: {}\n", scenario.title));
    prompt.push_str(&format!("Setting: {}\n", scenario.setting));
    prompt.push_str(&format!("Goal: {}\n", scenario.goal));
    prompt.push_str(&format!("Locations: {}\n", scenario.locations.join(", ")));
    prompt.push_str(&format!("Threats: {}\n\n", scenario.threats.join(", ")));

    prompt.push_str("[NPCS]\n");
    prompt.push_str(&serde_json::to_string(&scenario.npcs).unwrap_or_default());
    prompt.push_str("\n\n");

    let stats = &character.stats;
    prompt.push_str("[PLAYER CHARACTER]\n");
    prompt.push_str(&format!("Name: {}\n", character.name));
    prompt.push_str(&format!("Class: {}\n", character.class));
    prompt.push_str(&format!("HP: {}/{}\n", stats.hp, stats.max_hp));
    prompt.push_str(&format!(
        "Strength: {} / Agility: {} / Intelligence: {} / Luck: {}\n",
        stats.strength, stats.agility, stats.intelligence, stats.luck
    ));
    prompt.push_str(&format!("Inventory: {}\n", character.inventory.join(", ")));
    prompt.push_str(&format!("Background: {}\n\n", character.background));

    prompt.push_str("[RECENT EVENTS]\n");
    prompt.push_str(&format_history(history));
    prompt.push_str("\n\n");

    prompt.push_str("[PLAYER ACTION]\n");
    prompt.push_str(action);
    prompt.push_str("\n\n");

    prompt.push_str("(Describe only the result of the action above. Do not restate the action itself.)");

    prompt
}

/// System instruction for narrating a resolved roll
pub fn roll_result_instruction(language: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str("You are the game master of a TRPG.\n\n");
    prompt.push_str(
        "IMPORTANT: Do not narrate the player's action again. Describe only the consequences of the roll.\n",
    );
    prompt.push_str(&format!(
        "Write narration and dialogue in {}.\n\n",
        language
    ));

    push_image_prompt_rules(&mut prompt);

    prompt.push_str(
        r#"The output must be JSON in exactly this format:
{
  "narration": "Description of the result (2-4 sentences, no NPC speech, never repeat the action)",
  "dialogues": [
    {"speaker": "NPC name", "text": "What the NPC says"}
  ],
  "damage_taken": "Damage from a failure (0-20)",
  "items_gained": ["Items gained on success"],
  "danger_level": "safe/caution/danger",
  "image_prompt": "Genre and era + description of the current scene + style keywords (in English)"
}"#,
    );

    prompt
}

/// User prompt describing the roll that was made
pub fn roll_result_prompt(
    scenario: &Scenario,
    character: &Character,
    action: &str,
    roll: &RollOutcome,
) -> String {
    format!(
        "Scenario: {} - {}\n\n\
         The player attempted \"{}\" and the roll came up [{}].\n\
         Dice: {} + bonus {} = {} (target: {})\n\n\
         Character: {} ({})\n\n\
         Describe the situation that follows from this result.",
        scenario.title,
        scenario.setting,
        action,
        roll.verdict().label(),
        roll.roll,
        roll.bonus,
        roll.total,
        roll.difficulty,
        character.name,
        character.class,
    )
}

/// System instruction for turning a rough description into an image prompt
pub fn enhance_image_instruction() -> String {
    r#"You are an expert at writing image generation prompts.
Convert basic scene descriptions into detailed, artistic image prompts.

Include:
- Art style (e.g., digital art, oil painting, cinematic, anime)
- Lighting and atmosphere
- Color palette
- Composition details
- Mood and emotion

Respond with ONLY the enhanced prompt, no explanations. Keep it under 200 words."#
        .to_string()
}

pub fn enhance_image_prompt(prompt: &str, theme: &str) -> String {
    format!(
        "Basic description: {}\nTheme/Genre: {}\n\nCreate a detailed image generation prompt.",
        prompt, theme
    )
}

/// System instruction for deriving an image prompt from a scene
pub fn scene_image_instruction() -> String {
    r#"Create an image generation prompt for this TRPG scene.

Write a detailed image prompt in English (under 150 words) that captures:
- The environment and location
- Lighting and atmosphere
- Key visual elements
- Mood (tense, peaceful, mysterious, etc.)

Style: cinematic digital art, dramatic lighting

Respond with ONLY the prompt, nothing else."#
        .to_string()
}

pub fn scene_image_prompt(scene: &str, scenario: Option<&Scenario>) -> String {
    let setting = scenario
        .map(|s| s.setting.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("fantasy world");
    let theme = scenario
        .and_then(|s| s.theme.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or("adventure");

    format!(
        "Scene: {}\nSetting: {}\nTheme: {}\n\nCreate an image generation prompt.",
        scene, setting, theme
    )
}
