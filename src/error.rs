use thiserror::Error;

/// Shown when the page is opened straight from disk, where fetching is disallowed.
pub const FILE_CONTEXT_MESSAGE: &str = "Impossible de charger la recette du jour en ouvrant directement le fichier. Lancez un serveur HTTP local (par exemple : python -m http.server --directory RecettesUtils 8000) puis ouvrez http://localhost:8000/recette.html.";

/// Shown for every other load failure.
pub const FETCH_FAILURE_MESSAGE: &str = "Impossible de charger la recette du jour. Vérifiez que le fichier recette_du_jour.json est présent dans le même dossier.";

/// Errors that can occur while loading the recipe of the day
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The document location is a local file, where fetching is not allowed
    #[error("Cannot fetch the recipe from a local file location")]
    LocalFileContext,

    /// The document location could not be parsed as a URL
    #[error("Invalid document location: {0}")]
    InvalidLocation(String),

    /// Failed to fetch the document
    #[error("Failed to fetch document: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server answered with status {0}")]
    Status(u16),

    /// The response body is not JSON
    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Terminal or file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecipeError {
    /// The fixed message the display layer shows in place of the recipe.
    pub fn remediation_message(&self) -> &'static str {
        match self {
            RecipeError::LocalFileContext => FILE_CONTEXT_MESSAGE,
            _ => FETCH_FAILURE_MESSAGE,
        }
    }
}
