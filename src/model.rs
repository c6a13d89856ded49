use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One dish as returned by TheMealDB.
///
/// The payload is a flat object with no schema guarantee, so it is kept as a
/// JSON map and read through accessors that tolerate missing, null and
/// non-string values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawRecipe(Map<String, Value>);

impl RawRecipe {
    pub fn new(fields: Map<String, Value>) -> Self {
        RawRecipe(fields)
    }

    /// String value of `key`, or `None` when absent, null or not a string.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The `idMeal` field. Numeric ids are accepted and rendered as text.
    pub fn id(&self) -> Option<String> {
        match self.0.get("idMeal")? {
            Value::String(id) => Some(id.trim().to_string()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawRecipe {
    fn from(fields: Map<String, Value>) -> Self {
        RawRecipe(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub ingredient: String,
    pub measure: String,
}

/// Cleaned, structurally consistent recipe derived from a [`RawRecipe`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedRecipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    /// From `strArea`
    pub cuisine: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub source_url: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
}

impl NormalizedRecipe {
    /// Name to show when the source omitted one.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Untitled meal"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecipe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_field_ignores_null_and_non_strings() {
        let recipe = raw(json!({
            "strMeal": "Poutine",
            "strTags": null,
            "strCategory": 12
        }));

        assert_eq!(recipe.field("strMeal"), Some("Poutine"));
        assert_eq!(recipe.field("strTags"), None);
        assert_eq!(recipe.field("strCategory"), None);
        assert_eq!(recipe.field("strArea"), None);
    }

    #[test]
    fn test_numeric_id() {
        assert_eq!(raw(json!({"idMeal": 52772})).id().as_deref(), Some("52772"));
        assert_eq!(raw(json!({"idMeal": " 52772 "})).id().as_deref(), Some("52772"));
        assert_eq!(raw(json!({"idMeal": null})).id(), None);
    }

    #[test]
    fn test_display_name_fallback() {
        let recipe = NormalizedRecipe::default();
        assert_eq!(recipe.display_name(), "Untitled meal");
    }
}
