use mealdb_browser::{MealDbClient, MealDbError};
use mockito::Matcher;

const ARRABIATA: &str = include_str!("fixtures/arrabiata.json");

fn client_for(server: &mockito::Server) -> MealDbClient {
    MealDbClient::new(server.url(), None).unwrap()
}

#[tokio::test]
async fn test_search_by_name_returns_records() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Arrabiata".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ARRABIATA)
        .create_async()
        .await;

    let meals = client_for(&server).search_by_name("Arrabiata").await.unwrap();

    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id().as_deref(), Some("52771"));
    assert_eq!(meals[0].field("strMeal"), Some("Spicy Arrabiata Penne"));
}

#[tokio::test]
async fn test_empty_search_is_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "".into()))
        .with_status(200)
        .with_body(ARRABIATA)
        .expect(1)
        .create_async()
        .await;

    let meals = client_for(&server).search_by_name("").await.unwrap();

    assert_eq!(meals.len(), 1);
    m.assert_async().await;
}

#[tokio::test]
async fn test_search_with_no_matches() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let meals = client_for(&server).search_by_name("zzzz").await.unwrap();
    assert!(meals.is_empty());
}

#[tokio::test]
async fn test_lookup_unknown_id_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "99999999".into()))
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let result = client_for(&server).lookup_by_id("99999999").await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_lookup_with_mismatched_record_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ARRABIATA)
        .create_async()
        .await;

    let result = client_for(&server).lookup_by_id("123").await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_lookup_by_id() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52771".into()))
        .with_status(200)
        .with_body(ARRABIATA)
        .create_async()
        .await;

    let meal = client_for(&server).lookup_by_id("52771").await.unwrap().unwrap();
    assert_eq!(meal.field("strArea"), Some("Italian"));
}

#[tokio::test]
async fn test_blank_id_skips_the_network() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = client_for(&server).lookup_by_id("  ").await;
    assert!(matches!(result, Ok(None)));
    m.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let err = client_for(&server).lookup_by_id("52771").await.unwrap_err();
    assert!(matches!(err, MealDbError::Status(status) if status.as_u16() == 500));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_invalid_json_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>rate limited</html>")
        .create_async()
        .await;

    let err = client_for(&server).search_by_name("a").await.unwrap_err();
    assert!(matches!(err, MealDbError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Nothing listens on the discard port
    let client = MealDbClient::new("http://127.0.0.1:9", None).unwrap();

    let err = client.search_by_name("a").await.unwrap_err();
    assert!(matches!(err, MealDbError::Transport(_)));
}
