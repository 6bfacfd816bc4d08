//! The raw recipe document as supplied by the author.
//!
//! Nothing is trusted here: every field is optional and a field holding the
//! wrong JSON type decodes exactly as if it were absent.

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Keys accepted for the precomposed full text, consulted in this order.
pub const FULL_TEXT_KEYS: [&str; 2] = ["recette_complete", "recetteComplete"];

const TITLE_KEY: &str = "titre";
const DESCRIPTION_KEY: &str = "description";
const INGREDIENTS_KEY: &str = "ingredients";
const STEPS_KEY: &str = "etapes";
const STEP_INSTRUCTIONS_KEY: &str = "instructions";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecipeDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Some` whenever the document holds an array, even an empty one.
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<StepInput>>,
    pub full_text: Option<String>,
}

/// One element of the `etapes` array.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    Text(String),
    Structured {
        title: Option<String>,
        instructions: Option<String>,
    },
    /// Numbers, booleans, null and nested arrays.
    Unrecognized(Value),
}

impl From<Value> for StepInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => StepInput::Text(text),
            Value::Object(fields) => StepInput::Structured {
                title: text_field(&fields, TITLE_KEY),
                instructions: text_field(&fields, STEP_INSTRUCTIONS_KEY),
            },
            other => StepInput::Unrecognized(other),
        }
    }
}

impl From<Value> for RawRecipeDocument {
    fn from(value: Value) -> Self {
        let Value::Object(fields) = value else {
            debug!("Document is not a JSON object, every field treated as absent");
            return RawRecipeDocument::default();
        };

        let ingredients = match fields.get(INGREDIENTS_KEY) {
            Some(Value::Array(entries)) => Some(entries.iter().map(entry_text).collect()),
            _ => None,
        };

        let steps = match fields.get(STEPS_KEY) {
            Some(Value::Array(entries)) => {
                Some(entries.iter().cloned().map(StepInput::from).collect())
            }
            _ => None,
        };

        let full_text = FULL_TEXT_KEYS
            .iter()
            .find_map(|key| text_field(&fields, key));

        RawRecipeDocument {
            title: text_field(&fields, TITLE_KEY),
            description: text_field(&fields, DESCRIPTION_KEY),
            ingredients,
            steps,
            full_text,
        }
    }
}

impl<'de> Deserialize<'de> for RawRecipeDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(RawRecipeDocument::from)
    }
}

impl RawRecipeDocument {
    /// Decodes a document from JSON text. Fails only on invalid JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A string field, or `None` if it is missing, empty or not a string.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

fn entry_text(entry: &Value) -> String {
    match entry {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
