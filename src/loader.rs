use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use reqwest::{Client, Url};

use crate::config::AppConfig;
use crate::document::RawRecipeDocument;
use crate::error::RecipeError;

/// Supplies the raw recipe document.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self) -> Result<RawRecipeDocument, RecipeError>;
}

/// Fetches the document over HTTP from a path relative to the page location.
pub struct HttpLoader {
    client: Client,
    url: Url,
}

impl HttpLoader {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, RecipeError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));

        // The document changes daily, never serve it from a cache
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        let url = document_url(&config.location, &config.document)?;
        Self::new(url, Some(config.request_timeout()?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl DocumentLoader for HttpLoader {
    async fn load(&self) -> Result<RawRecipeDocument, RecipeError> {
        debug!("Fetching {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Fetching {} failed with status {}", self.url, status);
            return Err(RecipeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let document = RawRecipeDocument::from_json(&body)?;
        debug!("{:#?}", document);
        Ok(document)
    }
}

/// Resolves `document` against the page `location`, the way a browser
/// resolves a relative fetch.
///
/// A `file` location means the page was opened straight from disk, where
/// fetching is disallowed.
pub fn document_url(location: &str, document: &str) -> Result<Url, RecipeError> {
    let base = Url::parse(location).map_err(|e| {
        debug!("Cannot parse location {}: {}", location, e);
        RecipeError::InvalidLocation(format!("{location}: {e}"))
    })?;

    if base.scheme() == "file" {
        debug!("Refusing to fetch from a local file location: {}", location);
        return Err(RecipeError::LocalFileContext);
    }

    base.join(document)
        .map_err(|e| RecipeError::InvalidLocation(format!("{document}: {e}")))
}
