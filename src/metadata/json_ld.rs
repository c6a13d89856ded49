use crate::model::NormalizedRecipe;
use serde::Serialize;

/// Longest instructions excerpt used as the structured-data description.
pub const DESCRIPTION_LIMIT: usize = 200;

/// schema.org `Recipe` record embedded as JSON-LD on detail pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeStructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub description: String,
    #[serde(rename = "recipeCategory", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "recipeCuisine", skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(rename = "recipeIngredient")]
    pub ingredients: Vec<String>,
    #[serde(rename = "recipeInstructions", skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    #[serde(rename = "thumbnailUrl", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "contentUrl")]
    pub content_url: String,
    #[serde(rename = "embedUrl", skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

impl RecipeStructuredData {
    /// Build the JSON-LD record. `page_description` is used when the recipe
    /// has no instructions to excerpt.
    pub fn from_recipe(recipe: &NormalizedRecipe, page_description: &str) -> Self {
        let description = match &recipe.instructions {
            Some(instructions) => truncate(instructions, DESCRIPTION_LIMIT),
            None => page_description.to_string(),
        };

        let ingredients = recipe
            .ingredients
            .iter()
            .map(|i| format!("{} {}", i.measure, i.ingredient).trim().to_string())
            .collect();

        let keywords = (!recipe.tags.is_empty()).then(|| recipe.tags.join(", "));

        let video = recipe.video_url.as_ref().map(|url| VideoObject {
            kind: "VideoObject",
            name: recipe.display_name().to_string(),
            description: format!("How to make {}", recipe.display_name()),
            thumbnail_url: recipe.thumbnail_url.clone(),
            content_url: url.clone(),
            embed_url: youtube_embed_url(url),
        });

        RecipeStructuredData {
            context: "https://schema.org",
            kind: "Recipe",
            name: recipe.name.clone(),
            image: recipe.thumbnail_url.clone(),
            description,
            category: recipe.category.clone(),
            cuisine: recipe.cuisine.clone(),
            keywords,
            ingredients,
            instructions: recipe.instructions.clone(),
            video,
        }
    }

    /// Serialize for a `<script type="application/ld+json">` block.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Cut `text` to `limit` characters followed by `...`; shorter or equal
/// text is returned unchanged.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Embed URL for `youtube.com/watch?v=<id>` and `youtu.be/<id>` links.
fn youtube_embed_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    let id = if host == "youtu.be" {
        parsed
            .path_segments()?
            .next()
            .filter(|id| !id.is_empty())
            .map(String::from)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, id)| id.into_owned())
            .filter(|id| !id.is_empty())
    } else {
        None
    }?;

    Some(format!("https://www.youtube.com/embed/{id}"))
}
