use crate::client::MealDbClient;
use crate::metadata::{list_metadata, MetadataRecord};
use crate::model::NormalizedRecipe;
use crate::normalize::normalize;
use log::{info, warn};

/// Everything the list page renders.
#[derive(Debug, Clone)]
pub struct ListView {
    pub query: String,
    pub recipes: Vec<NormalizedRecipe>,
    pub metadata: MetadataRecord,
}

/// Search by name and normalize the results.
///
/// Records without an id cannot be linked to a detail page and are dropped.
pub async fn process(client: &MealDbClient, query: &str) -> ListView {
    let recipes = match client.search_by_name(query).await {
        Ok(meals) => meals
            .iter()
            .map(normalize)
            .filter(|recipe| {
                if recipe.id.is_empty() {
                    warn!("Dropping search result without idMeal: {:?}", recipe.name);
                    false
                } else {
                    true
                }
            })
            .collect(),
        Err(e) => {
            warn!("Meal search for {:?} failed: {}", query, e);
            Vec::new()
        }
    };

    info!("Search {:?} returned {} meals", query, recipes.len());

    ListView {
        query: query.to_string(),
        recipes,
        metadata: list_metadata(query),
    }
}
