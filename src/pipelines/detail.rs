use crate::client::MealDbClient;
use crate::metadata::{build_metadata, not_found_metadata, MetadataRecord};
use crate::model::NormalizedRecipe;
use crate::normalize::normalize;
use log::{info, warn};

/// What the detail page renders for one id.
#[derive(Debug, Clone)]
pub enum DetailView {
    Found {
        recipe: NormalizedRecipe,
        metadata: MetadataRecord,
    },
    NotFound {
        metadata: MetadataRecord,
    },
}

impl DetailView {
    pub fn metadata(&self) -> &MetadataRecord {
        match self {
            DetailView::Found { metadata, .. } | DetailView::NotFound { metadata } => metadata,
        }
    }

    pub fn recipe(&self) -> Option<&NormalizedRecipe> {
        match self {
            DetailView::Found { recipe, .. } => Some(recipe),
            DetailView::NotFound { .. } => None,
        }
    }

    fn not_found() -> Self {
        DetailView::NotFound {
            metadata: not_found_metadata(),
        }
    }
}

/// Look up one meal and build its page metadata.
///
/// Both a missing record and a failed request end up as
/// [`DetailView::NotFound`].
pub async fn process(client: &MealDbClient, id: &str) -> DetailView {
    match client.lookup_by_id(id).await {
        Ok(Some(raw)) => {
            let recipe = normalize(&raw);
            let metadata = build_metadata(&recipe);
            DetailView::Found { recipe, metadata }
        }
        Ok(None) => {
            info!("Meal {:?} not found", id);
            DetailView::not_found()
        }
        Err(e) => {
            warn!("Meal lookup for {:?} failed: {}", id, e);
            DetailView::not_found()
        }
    }
}
