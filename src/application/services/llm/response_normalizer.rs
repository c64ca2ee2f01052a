//! Response normalizer - Turns raw model text into a predictable JSON mapping
//!
//! The model is asked for a JSON object but may reply with an array or a bare
//! value. Replies are first classified into a [`DecodedReply`], which always
//! collapses into a mapping, and then decoded into the typed contract of the
//! route.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Key used to wrap a top-level array
pub const SEQUENCE_KEY: &str = "items";
/// Key used to wrap a top-level scalar
pub const SCALAR_KEY: &str = "result";
/// Key every game-event reply must carry
pub const DIALOGUES_KEY: &str = "dialogues";

/// Errors raised while normalizing a reply
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    /// The reply was not valid JSON
    #[error("Failed to parse model reply as JSON: {reason}")]
    Parse { raw: String, reason: String },
    /// The reply was JSON but did not fit the expected record
    #[error("Model reply does not match the expected shape: {reason}")]
    Shape { raw: String, reason: String },
}

impl NormalizeError {
    /// The reply text that failed, for display to the caller
    pub fn raw_response(&self) -> &str {
        match self {
            Self::Parse { raw, .. } | Self::Shape { raw, .. } => raw,
        }
    }

    /// The underlying parser diagnostic
    pub fn reason(&self) -> &str {
        match self {
            Self::Parse { reason, .. } | Self::Shape { reason, .. } => reason,
        }
    }
}

/// A parsed reply, classified by its top-level JSON kind
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedReply {
    Mapping(Map<String, Value>),
    WrappedSequence(Vec<Value>),
    WrappedScalar(Value),
}

impl DecodedReply {
    /// Strictly parse `raw` as JSON and classify it
    pub fn parse(raw: &str) -> Result<Self, NormalizeError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| NormalizeError::Parse {
            raw: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(match value {
            Value::Object(map) => Self::Mapping(map),
            Value::Array(items) => Self::WrappedSequence(items),
            scalar => Self::WrappedScalar(scalar),
        })
    }

    /// Collapse into a mapping, wrapping arrays under `items` and scalars under `result`
    pub fn into_mapping(self) -> Map<String, Value> {
        match self {
            Self::Mapping(map) => map,
            Self::WrappedSequence(items) => {
                let mut map = Map::new();
                map.insert(SEQUENCE_KEY.to_string(), Value::Array(items));
                map
            }
            Self::WrappedScalar(value) => {
                let mut map = Map::new();
                map.insert(SCALAR_KEY.to_string(), value);
                map
            }
        }
    }
}

/// Parse a reply into a mapping
pub fn normalize(raw: &str) -> Result<Map<String, Value>, NormalizeError> {
    Ok(DecodedReply::parse(raw)?.into_mapping())
}

/// Parse a game-event reply, adding an empty `dialogues` list when it is missing
pub fn normalize_game_event(raw: &str) -> Result<Map<String, Value>, NormalizeError> {
    let mut map = normalize(raw)?;
    map.entry(DIALOGUES_KEY)
        .or_insert_with(|| Value::Array(Vec::new()));
    Ok(map)
}

/// Decode a normalized mapping into a typed record
///
/// `raw` is the model text the mapping came from and is what a shape error reports.
pub fn decode<T: DeserializeOwned>(
    raw: &str,
    map: Map<String, Value>,
) -> Result<T, NormalizeError> {
    serde_json::from_value(Value::Object(map)).map_err(|e| NormalizeError::Shape {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
