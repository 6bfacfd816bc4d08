use serde::Serialize;

use crate::document::{RawRecipeDocument, StepInput};

/// Where the recipe's full text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FullTextSource {
    /// Copied from the document's precomposed field.
    Supplied,
    /// Joined from the canonical steps.
    Generated,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    title: String,
    instructions: String,
}

impl Step {
    pub(crate) fn new(title: String, instructions: String) -> Self {
        Step {
            title,
            instructions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

/// The canonical, display-ready recipe. Built only by [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    title: String,
    description: String,
    ingredients: Vec<String>,
    steps: Vec<Step>,
    full_text: String,
    full_text_source: FullTextSource,
}

impl Recipe {
    pub(crate) fn new(
        title: String,
        description: String,
        ingredients: Vec<String>,
        steps: Vec<Step>,
        full_text: String,
        full_text_source: FullTextSource,
    ) -> Self {
        debug_assert!(!full_text.is_empty());
        Recipe {
            title,
            description,
            ingredients,
            steps,
            full_text,
            full_text_source,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Never empty.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn full_text_source(&self) -> FullTextSource {
        self.full_text_source
    }

    /// Re-expresses the recipe as a raw document that normalizes back to it.
    ///
    /// Steps are written in structured form and the full text is kept only
    /// when it was supplied, so generated text is derived again from the steps.
    pub fn to_document(&self) -> RawRecipeDocument {
        RawRecipeDocument {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            ingredients: Some(self.ingredients.clone()),
            steps: Some(
                self.steps
                    .iter()
                    .map(|step| StepInput::Structured {
                        title: Some(step.title.clone()),
                        instructions: Some(step.instructions.clone()),
                    })
                    .collect(),
            ),
            full_text: match self.full_text_source {
                FullTextSource::Supplied => Some(self.full_text.clone()),
                FullTextSource::Generated | FullTextSource::Placeholder => None,
            },
        }
    }
}
