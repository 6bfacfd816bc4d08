pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod model;
pub mod navigator;
pub mod normalize;
pub mod render;
pub mod view;

use log::debug;

pub use app::{App, Command, Panel};
pub use config::AppConfig;
pub use document::{RawRecipeDocument, StepInput, FULL_TEXT_KEYS};
pub use error::RecipeError;
pub use loader::{DocumentLoader, HttpLoader};
pub use model::{FullTextSource, Recipe, Step};
pub use navigator::{CurrentStep, NavigatorState, StepNavigator, Transition};
pub use normalize::normalize;
pub use view::AppView;

/// Loads the document with `loader` and normalizes it.
pub async fn load_recipe(loader: &dyn DocumentLoader) -> Result<Recipe, RecipeError> {
    let document = loader.load().await?;
    let recipe = normalize(&document);
    debug!("{:#?}", recipe);
    Ok(recipe)
}

/// Fetches and normalizes the recipe of the day published next to `location`.
pub async fn fetch_recipe(location: &str) -> Result<Recipe, RecipeError> {
    let config = AppConfig {
        location: location.to_string(),
        ..AppConfig::default()
    };
    fetch_recipe_with_config(&config).await
}

pub async fn fetch_recipe_with_config(config: &AppConfig) -> Result<Recipe, RecipeError> {
    let loader = HttpLoader::from_config(config)?;
    load_recipe(&loader).await
}
