use log::{debug, warn};

use crate::document::{RawRecipeDocument, StepInput};
use crate::model::{FullTextSource, Recipe, Step};

pub const DEFAULT_TITLE: &str = "Recette du jour";
pub const DESCRIPTION_PLACEHOLDER: &str =
    "Ajoutez une description dans votre fichier recette_du_jour.json pour voir un aperçu ici.";
pub const INGREDIENTS_PLACEHOLDER: &str =
    "Aucun ingrédient trouvé. Ajoutez des entrées dans la propriété \"ingredients\".";
pub const FULL_TEXT_PLACEHOLDER: &str = "Ajoutez un champ \"recette_complete\" ou \"recetteComplete\" dans votre JSON, ou une liste d'étapes pour générer le texte complet.";

/// Builds the canonical recipe from a raw document.
///
/// Total over every document: a missing or malformed field degrades to a
/// placeholder or an empty default, never to an error.
pub fn normalize(raw: &RawRecipeDocument) -> Recipe {
    let title = non_empty(raw.title.as_deref()).unwrap_or(DEFAULT_TITLE);
    let description = non_empty(raw.description.as_deref()).unwrap_or(DESCRIPTION_PLACEHOLDER);

    let ingredients = match raw.ingredients.as_deref() {
        Some(entries) if !entries.is_empty() => entries.to_vec(),
        _ => vec![INGREDIENTS_PLACEHOLDER.to_string()],
    };

    let steps: Vec<Step> = raw
        .steps
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, input)| canonical_step(index + 1, input))
        .collect();

    let (full_text, full_text_source) = match non_empty(raw.full_text.as_deref()) {
        Some(text) => (text.to_string(), FullTextSource::Supplied),
        None if !steps.is_empty() => (generate_full_text(&steps), FullTextSource::Generated),
        None => (FULL_TEXT_PLACEHOLDER.to_string(), FullTextSource::Placeholder),
    };

    debug!(
        "Normalized \"{}\": {} ingredients, {} steps, full text {:?}",
        title,
        ingredients.len(),
        steps.len(),
        full_text_source
    );

    Recipe::new(
        title.to_string(),
        description.to_string(),
        ingredients,
        steps,
        full_text,
        full_text_source,
    )
}

/// Default title of the step at 1-based `position`.
pub fn step_title(position: usize) -> String {
    format!("Étape {position}")
}

/// Joins the steps into numbered paragraphs separated by a blank line.
pub fn generate_full_text(steps: &[Step]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let prefix = if step.title().is_empty() {
                String::new()
            } else {
                format!("{} - ", step.title())
            };
            format!("{}. {}{}", index + 1, prefix, step.instructions())
                .trim()
                .to_string()
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

fn canonical_step(position: usize, input: &StepInput) -> Step {
    match input {
        StepInput::Text(text) => Step::new(step_title(position), text.clone()),
        StepInput::Structured {
            title,
            instructions,
        } => Step::new(
            non_empty(title.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| step_title(position)),
            instructions.clone().unwrap_or_default(),
        ),
        StepInput::Unrecognized(value) => {
            warn!(
                "Step {} has an unsupported shape ({}), keeping it without instructions",
                position, value
            );
            Step::new(step_title(position), String::new())
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize_json(value: serde_json::Value) -> Recipe {
        normalize(&RawRecipeDocument::from(value))
    }

    #[test]
    fn test_tarte_example() {
        let recipe = normalize_json(json!({"titre": "Tarte", "etapes": ["Préchauffer", "Mélanger"]}));

        assert_eq!(recipe.title(), "Tarte");
        assert_eq!(recipe.ingredients(), [INGREDIENTS_PLACEHOLDER.to_string()]);
        assert_eq!(recipe.steps().len(), 2);
        assert_eq!(recipe.steps()[0].title(), "Étape 1");
        assert_eq!(recipe.steps()[0].instructions(), "Préchauffer");
        assert_eq!(recipe.steps()[1].title(), "Étape 2");
        assert_eq!(recipe.steps()[1].instructions(), "Mélanger");
        assert_eq!(
            recipe.full_text(),
            "1. Étape 1 - Préchauffer\n\n2. Étape 2 - Mélanger"
        );
        assert_eq!(recipe.full_text_source(), FullTextSource::Generated);
    }

    #[test]
    fn test_empty_document_uses_placeholders() {
        let recipe = normalize(&RawRecipeDocument::default());

        assert_eq!(recipe.title(), DEFAULT_TITLE);
        assert_eq!(recipe.description(), DESCRIPTION_PLACEHOLDER);
        assert_eq!(recipe.ingredients(), [INGREDIENTS_PLACEHOLDER.to_string()]);
        assert!(recipe.steps().is_empty());
        assert_eq!(recipe.full_text(), FULL_TEXT_PLACEHOLDER);
        assert_eq!(recipe.full_text_source(), FullTextSource::Placeholder);
    }

    #[test]
    fn test_empty_ingredient_list_uses_placeholder() {
        let recipe = normalize_json(json!({"ingredients": []}));
        assert_eq!(recipe.ingredients(), [INGREDIENTS_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_ingredients_are_copied_verbatim() {
        let recipe = normalize_json(json!({"ingredients": ["sel", "sel", "  poivre "]}));
        assert_eq!(recipe.ingredients(), ["sel", "sel", "  poivre "]);
    }

    #[test]
    fn test_structured_step_defaults() {
        let recipe = normalize_json(json!({
            "etapes": [
                {"instructions": "Battre les oeufs"},
                {"titre": "Repos"},
                {"titre": "", "instructions": "Servir"}
            ]
        }));

        let steps = recipe.steps();
        assert_eq!(steps[0].title(), "Étape 1");
        assert_eq!(steps[0].instructions(), "Battre les oeufs");
        assert_eq!(steps[1].title(), "Repos");
        assert_eq!(steps[1].instructions(), "");
        assert_eq!(steps[2].title(), "Étape 3");
        assert_eq!(
            recipe.full_text(),
            "1. Étape 1 - Battre les oeufs\n\n2. Repos -\n\n3. Étape 3 - Servir"
        );
    }

    #[test]
    fn test_unrecognized_steps_keep_their_position() {
        let recipe = normalize_json(json!({"etapes": [null, "Cuire", 12]}));

        let steps = recipe.steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].title(), "Étape 1");
        assert_eq!(steps[0].instructions(), "");
        assert_eq!(steps[1].title(), "Étape 2");
        assert_eq!(steps[1].instructions(), "Cuire");
        assert_eq!(steps[2].title(), "Étape 3");
    }

    #[test]
    fn test_supplied_full_text_wins_verbatim() {
        let recipe = normalize_json(json!({
            "etapes": ["Cuire"],
            "recetteComplete": "  Texte libre\n"
        }));
        assert_eq!(recipe.full_text(), "  Texte libre\n");
        assert_eq!(recipe.full_text_source(), FullTextSource::Supplied);
    }

    #[test]
    fn test_empty_steps_fall_through_to_placeholder() {
        let recipe = normalize_json(json!({"etapes": []}));
        assert!(recipe.steps().is_empty());
        assert_eq!(recipe.full_text(), FULL_TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_generated_entries_are_trimmed() {
        let steps = vec![
            Step::new("Étape 1".to_string(), "  Mélanger  ".to_string()),
            Step::new(String::new(), "Cuire".to_string()),
        ];
        // Only the ends of each entry are trimmed
        assert_eq!(
            generate_full_text(&steps),
            "1. Étape 1 -   Mélanger\n\n2. Cuire"
        );
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let steps = vec![
            Step::new("Étape 1".to_string(), "Mélanger \n\t".to_string()),
            Step::new("Repos".to_string(), String::new()),
        ];
        assert_eq!(
            generate_full_text(&steps),
            "1. Étape 1 - Mélanger\n\n2. Repos -"
        );
    }

    #[test]
    fn test_untitled_step_keeps_inner_spacing() {
        let steps = vec![Step::new(String::new(), "   Cuire   ".to_string())];
        assert_eq!(generate_full_text(&steps), "1.    Cuire");
    }
}
