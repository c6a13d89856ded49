use crate::config::ApiConfig;
use crate::error::MealDbError;
use crate::model::RawRecipe;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Read-only client for the two TheMealDB endpoints we use.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, MealDbError> {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        let timeout = timeout.unwrap_or_else(|| config.timeout());
        Self::with_options(&config.base_url, timeout, &config.user_agent)
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, MealDbError> {
        Self::with_options(&config.base_url, config.timeout(), &config.user_agent)
    }

    pub fn with_options(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, MealDbError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search meals by name.
    ///
    /// The query is forwarded untouched, including the empty string; the API
    /// decides what an empty search returns. `meals: null` is an empty list.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<RawRecipe>, MealDbError> {
        let url = format!("{}/search.php", self.base_url);
        debug!("Searching meals for {:?}", query);

        let meals = self.fetch_meals(&url, &[("s", query)]).await?;
        Ok(meals.unwrap_or_default())
    }

    /// Look up one meal by id.
    ///
    /// Returns `Ok(None)` when the API has no matching record. A blank id
    /// never reaches the network.
    pub async fn lookup_by_id(&self, id: &str) -> Result<Option<RawRecipe>, MealDbError> {
        let id = id.trim();
        if id.is_empty() {
            debug!("Skipping lookup for blank meal id");
            return Ok(None);
        }

        let url = format!("{}/lookup.php", self.base_url);
        debug!("Looking up meal {}", id);

        let meals = self.fetch_meals(&url, &[("i", id)]).await?;
        let found = meals
            .and_then(|meals| meals.into_iter().next())
            .filter(|meal| meal.id().as_deref() == Some(id));

        Ok(found)
    }

    async fn fetch_meals(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<Vec<RawRecipe>>, MealDbError> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(MealDbError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_meals(&body)
    }
}

/// Decode the `{"meals": null | [...]}` envelope shared by both endpoints.
fn parse_meals(body: &str) -> Result<Option<Vec<RawRecipe>>, MealDbError> {
    let mut json: Value =
        serde_json::from_str(body).map_err(|e| MealDbError::MalformedResponse(e.to_string()))?;

    let meals = json
        .get_mut("meals")
        .map(Value::take)
        .ok_or_else(|| MealDbError::MalformedResponse("missing `meals` field".to_string()))?;

    serde_json::from_value(meals).map_err(|e| MealDbError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_null_meals() {
        assert_eq!(parse_meals(r#"{"meals": null}"#).unwrap(), None);
    }

    #[test]
    fn test_parse_meals_list() {
        let meals = parse_meals(r#"{"meals": [{"idMeal": "1"}, {"idMeal": "2"}]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[1].id().as_deref(), Some("2"));
    }

    #[test]
    fn test_parse_missing_meals_field() {
        let err = parse_meals(r#"{"recipes": []}"#).unwrap_err();
        assert!(matches!(err, MealDbError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_meals(r#"{"meals": "nope"}"#).unwrap_err();
        assert!(matches!(err, MealDbError::MalformedResponse(_)));

        let err = parse_meals("<html>busy</html>").unwrap_err();
        assert!(matches!(err, MealDbError::MalformedResponse(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = MealDbClient::new("http://localhost:1234/api/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/api");
    }
}
