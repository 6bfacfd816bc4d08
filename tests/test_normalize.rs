use daily_recipe::normalize::{
    DESCRIPTION_PLACEHOLDER, FULL_TEXT_PLACEHOLDER, INGREDIENTS_PLACEHOLDER,
};
use daily_recipe::{normalize, FullTextSource, RawRecipeDocument};
use serde_json::{json, Value};

fn odd_documents() -> Vec<Value> {
    vec![
        json!({}),
        json!(null),
        json!("Tarte"),
        json!(42),
        json!([{"titre": "Tarte"}]),
        json!({"titre": "", "description": "", "ingredients": [], "etapes": []}),
        json!({"titre": {"fr": "Tarte"}, "ingredients": {"a": 1}, "etapes": "Cuire"}),
        json!({"etapes": [null, true, 3.5, [], {}, {"titre": null}, ""]}),
        json!({"etapes": [{"instructions": ""}], "recette_complete": ""}),
        json!({"recetteComplete": 1, "recette_complete": ["a"]}),
        json!({"ingredients": [null, {"nom": "sel"}, ["a"], 2]}),
    ]
}

#[test]
fn test_normalize_is_total_and_full_text_never_empty() {
    for value in odd_documents() {
        let recipe = normalize(&RawRecipeDocument::from(value.clone()));
        assert!(!recipe.full_text().is_empty(), "empty full text for {value}");
        assert!(!recipe.title().is_empty(), "empty title for {value}");
        assert!(!recipe.ingredients().is_empty(), "no ingredients for {value}");
        assert!(
            recipe.steps().iter().all(|step| !step.title().is_empty()),
            "untitled step for {value}"
        );
    }
}

#[test]
fn test_tarte_example() {
    let document = RawRecipeDocument::from_json(r#"{"titre":"Tarte","etapes":["Préchauffer","Mélanger"]}"#)
        .unwrap();
    let recipe = normalize(&document);

    assert_eq!(recipe.ingredients(), [INGREDIENTS_PLACEHOLDER]);
    assert_eq!(recipe.description(), DESCRIPTION_PLACEHOLDER);
    assert_eq!(
        recipe
            .steps()
            .iter()
            .map(|step| (step.title(), step.instructions()))
            .collect::<Vec<_>>(),
        vec![("Étape 1", "Préchauffer"), ("Étape 2", "Mélanger")]
    );
    assert_eq!(
        recipe.full_text(),
        "1. Étape 1 - Préchauffer\n\n2. Étape 2 - Mélanger"
    );
}

#[test]
fn test_absent_steps_fall_through_to_placeholder() {
    let recipe = normalize(&RawRecipeDocument::from(json!({"titre": "Tarte"})));
    assert!(recipe.steps().is_empty());
    assert_eq!(recipe.full_text(), FULL_TEXT_PLACEHOLDER);
}

#[test]
fn test_either_full_text_key_beats_steps() {
    for key in ["recette_complete", "recetteComplete"] {
        let recipe = normalize(&RawRecipeDocument::from(json!({
            "etapes": ["Cuire"],
            key: "Le texte de l'auteur."
        })));
        assert_eq!(recipe.full_text(), "Le texte de l'auteur.");
        assert_eq!(recipe.full_text_source(), FullTextSource::Supplied);
    }
}

#[test]
fn test_normalization_is_deterministic() {
    let document = RawRecipeDocument::from(json!({
        "etapes": ["a", {"titre": "B", "instructions": "b"}, 7]
    }));
    let first = normalize(&document);
    let second = normalize(&document);
    assert_eq!(first, second);
}

#[test]
fn test_inverse_document_normalizes_back() {
    let mut values = odd_documents();
    values.push(json!({
        "titre": "Tarte",
        "description": "Une tarte",
        "ingredients": ["pommes"],
        "etapes": ["Préchauffer", {"titre": "Cuire", "instructions": "35 min"}]
    }));
    values.push(json!({"etapes": ["a"], "recetteComplete": "Texte"}));

    for value in values {
        let recipe = normalize(&RawRecipeDocument::from(value.clone()));
        let again = normalize(&recipe.to_document());
        assert_eq!(recipe, again, "not a fixpoint for {value}");
    }
}
