//! Read-through recipe browser core over the TheMealDB API.
//!
//! [`MealDbClient`] fetches raw records, [`normalize`] turns them into
//! [`NormalizedRecipe`]s, [`build_metadata`] derives page metadata and
//! JSON-LD, and [`SearchController`] keeps a search input in sync with the
//! list page URL.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod metadata;
pub mod model;
pub mod normalize;
pub mod pipelines;
pub mod search;

pub use builder::{MealBrowser, MealBrowserBuilder};
pub use client::MealDbClient;
pub use crate::config::AppConfig;
pub use error::MealDbError;
pub use metadata::{build_metadata, not_found_metadata, render_head, MetadataRecord};
pub use model::{Ingredient, NormalizedRecipe, RawRecipe};
pub use normalize::normalize;
pub use pipelines::{DetailView, ListView};
pub use search::{navigation_target, Navigator, SearchController, SearchState, SearchStatus};

/// Search meals by name and normalize the results.
///
/// Settings come from `mealdb.toml` and `MEALDB__*` variables, as in
/// [`MealBrowser::from_env`]. Unlike [`MealBrowser::list`] this surfaces API
/// failures to the caller.
pub async fn search_meals(query: &str) -> Result<Vec<NormalizedRecipe>, MealDbError> {
    MealBrowser::from_env()?.search(query).await
}

/// Look up one meal by id, configured like [`search_meals`].
pub async fn lookup_meal(id: &str) -> Result<Option<NormalizedRecipe>, MealDbError> {
    MealBrowser::from_env()?.lookup(id).await
}
