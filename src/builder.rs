use std::sync::Arc;
use std::time::Duration;

use crate::{
    client::MealDbClient,
    config::{ApiConfig, AppConfig, SearchConfig},
    model::NormalizedRecipe,
    normalize::normalize,
    pipelines::{self, DetailView, ListView},
    search::{Navigator, SearchController},
    MealDbError,
};

/// Builder for configuring a [`MealBrowser`]
#[derive(Debug, Default)]
pub struct MealBrowserBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    search_path: Option<String>,
    debounce: Option<Duration>,
}

impl MealBrowserBuilder {
    /// Start from loaded configuration; later builder calls override it.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: Some(config.api.base_url.clone()),
            timeout: Some(config.api.timeout()),
            user_agent: Some(config.api.user_agent.clone()),
            search_path: Some(config.search.path.clone()),
            debounce: Some(config.search.debounce()),
        }
    }

    /// Set the API base URL
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::MealBrowser;
    ///
    /// let builder = MealBrowser::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::MealBrowser;
    /// use std::time::Duration;
    ///
    /// let builder = MealBrowser::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Path of the list page the search input navigates to
    pub fn search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    /// Delay search navigations until input has been quiet this long
    pub fn debounce(mut self, duration: Duration) -> Self {
        self.debounce = Some(duration);
        self
    }

    /// Build the browser
    ///
    /// # Errors
    /// Returns `MealDbError::Transport` if the HTTP client cannot be created.
    pub fn build(self) -> Result<MealBrowser, MealDbError> {
        let defaults = ApiConfig::default();
        let client = MealDbClient::with_options(
            self.base_url.as_deref().unwrap_or(&defaults.base_url),
            self.timeout.unwrap_or_else(|| defaults.timeout()),
            self.user_agent.as_deref().unwrap_or(&defaults.user_agent),
        )?;

        Ok(MealBrowser {
            client,
            search_path: self.search_path.unwrap_or_else(|| SearchConfig::default().path),
            debounce: self.debounce.unwrap_or_default(),
        })
    }
}

/// Read-through view over TheMealDB for the list and detail pages
#[derive(Debug, Clone)]
pub struct MealBrowser {
    client: MealDbClient,
    search_path: String,
    debounce: Duration,
}

impl MealBrowser {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use mealdb_browser::MealBrowser;
    ///
    /// let builder = MealBrowser::builder();
    /// ```
    pub fn builder() -> MealBrowserBuilder {
        MealBrowserBuilder::default()
    }

    /// Build from `mealdb.toml` and `MEALDB__*` environment variables.
    pub fn from_env() -> Result<Self, MealDbError> {
        let config = AppConfig::load()?;
        MealBrowserBuilder::from_config(&config).build()
    }

    pub fn client(&self) -> &MealDbClient {
        &self.client
    }

    /// List page for an optional search query. Never fails.
    ///
    /// # Example
    /// ```no_run
    /// # use mealdb_browser::MealBrowser;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let browser = MealBrowser::builder().build()?;
    /// let view = browser.list("Arrabiata").await;
    /// for recipe in &view.recipes {
    ///     println!("{} -> /meals/{}", recipe.name, recipe.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, query: &str) -> ListView {
        pipelines::list::process(&self.client, query).await
    }

    /// Detail page for one meal id. Never fails.
    pub async fn detail(&self, id: &str) -> DetailView {
        pipelines::detail::process(&self.client, id).await
    }

    /// Search by name, returning API failures instead of an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<NormalizedRecipe>, MealDbError> {
        let meals = self.client.search_by_name(query).await?;
        Ok(meals.iter().map(normalize).collect())
    }

    /// Look up one meal, returning API failures instead of a not-found view.
    pub async fn lookup(&self, id: &str) -> Result<Option<NormalizedRecipe>, MealDbError> {
        let meal = self.client.lookup_by_id(id).await?;
        Ok(meal.as_ref().map(normalize))
    }

    /// Search input controller wired to this browser's list path.
    pub fn search_controller<N: Navigator + 'static>(&self, navigator: Arc<N>) -> SearchController<N> {
        SearchController::new(navigator, self.search_path.clone()).with_debounce(self.debounce)
    }
}
