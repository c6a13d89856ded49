use crate::model::{Ingredient, NormalizedRecipe, RawRecipe};

/// Highest `strIngredientN` / `strMeasureN` index the API emits.
pub const MAX_INGREDIENTS: usize = 20;

/// Convert a raw API record into a [`NormalizedRecipe`].
///
/// Total over any record: missing fields fall back to empty values.
pub fn normalize(raw: &RawRecipe) -> NormalizedRecipe {
    NormalizedRecipe {
        id: raw.id().unwrap_or_default(),
        name: raw.field("strMeal").map(str::trim).unwrap_or_default().to_string(),
        category: optional(raw, "strCategory"),
        cuisine: optional(raw, "strArea"),
        instructions: optional(raw, "strInstructions"),
        thumbnail_url: optional(raw, "strMealThumb"),
        video_url: optional(raw, "strYoutube"),
        source_url: optional(raw, "strSource"),
        tags: raw.field("strTags").map(parse_tags).unwrap_or_default(),
        ingredients: extract_ingredients(raw),
    }
}

/// Split a comma-separated tag string, dropping blank pieces.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Collect the populated ingredient/measure pairs in index order.
///
/// An entry is kept iff its trimmed ingredient name is non-empty. Measures
/// are kept as-is and duplicate names are not merged.
pub fn extract_ingredients(raw: &RawRecipe) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENTS)
        .filter_map(|i| {
            let ingredient = raw.field(&format!("strIngredient{i}"))?.trim();
            if ingredient.is_empty() {
                return None;
            }
            let measure = raw.field(&format!("strMeasure{i}")).unwrap_or_default();

            Some(Ingredient {
                ingredient: ingredient.to_string(),
                measure: measure.to_string(),
            })
        })
        .collect()
}

// Trimmed text, with blank values treated as absent
fn optional(raw: &RawRecipe, key: &str) -> Option<String> {
    raw.field(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
