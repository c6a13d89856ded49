//! Page metadata derived from a normalized recipe.

mod head;
mod json_ld;

pub use head::render_head;
pub use json_ld::{truncate, RecipeStructuredData, VideoObject, DESCRIPTION_LIMIT};

use crate::model::NormalizedRecipe;
use serde::Serialize;

const FALLBACK_TITLE: &str = "Recipe Details";
const BASE_KEYWORDS: [&str; 3] = ["recipe", "cooking", "food"];

/// Title, description, keywords and structured data for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Preview image for Open Graph and Twitter cards
    pub image: Option<String>,
    pub structured_data: Option<RecipeStructuredData>,
}

/// Build the detail-page metadata for `recipe`.
///
/// Only call this for a recipe that was actually found; missing recipes get
/// [`not_found_metadata`].
pub fn build_metadata(recipe: &NormalizedRecipe) -> MetadataRecord {
    let name = recipe.name.trim();

    let title = if name.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        format!("{name} Recipe")
    };

    let description = describe(recipe);

    let keywords = [
        Some(recipe.name.as_str()),
        recipe.category.as_deref(),
        recipe.cuisine.as_deref(),
    ]
    .into_iter()
    .flatten()
    .chain(BASE_KEYWORDS)
    .chain(recipe.tags.iter().map(String::as_str))
    .filter(|keyword| !keyword.is_empty())
    .map(String::from)
    .collect();

    let structured_data = RecipeStructuredData::from_recipe(recipe, &description);

    MetadataRecord {
        title,
        description,
        keywords,
        image: recipe.thumbnail_url.clone(),
        structured_data: Some(structured_data),
    }
}

/// Fixed record for a detail page whose recipe could not be loaded.
pub fn not_found_metadata() -> MetadataRecord {
    MetadataRecord {
        title: "Meal Not Found".to_string(),
        description: "Sorry, we couldn't find the meal you're looking for. \
                      It may have been removed or the link might be incorrect."
            .to_string(),
        keywords: Vec::new(),
        image: None,
        structured_data: None,
    }
}

/// Record for the list page, optionally scoped to a search query.
pub fn list_metadata(query: &str) -> MetadataRecord {
    let query = query.trim();
    let (title, description) = if query.is_empty() {
        (
            "Browse Meals".to_string(),
            "Browse meals from around the world with ingredients and step-by-step instructions."
                .to_string(),
        )
    } else {
        (
            format!("Meals matching \"{query}\""),
            format!("Recipes matching \"{query}\" with ingredients and step-by-step instructions."),
        )
    };

    let keywords = std::iter::once(query)
        .chain(BASE_KEYWORDS)
        .filter(|keyword| !keyword.is_empty())
        .map(String::from)
        .collect();

    MetadataRecord {
        title,
        description,
        keywords,
        image: None,
        structured_data: None,
    }
}

fn describe(recipe: &NormalizedRecipe) -> String {
    let name = match recipe.name.trim() {
        "" => "this dish",
        name => name,
    };

    let kind = [recipe.cuisine.as_deref(), recipe.category.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    if kind.is_empty() {
        format!("Learn how to cook {name} with a full ingredient list and step-by-step instructions.")
    } else {
        format!(
            "Learn how to cook {name} ({kind}) with a full ingredient list and step-by-step instructions."
        )
    }
}
