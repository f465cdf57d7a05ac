use barcart::firebase::{AssetResolver, DocumentStore, FirebaseError, FirebaseStorageResolver, FirestoreStore};
use barcart::recipes::{
    CocktailDbProvider, ProviderError, RecipeProvider, Spirit, fetch_catalog, fetch_random,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A CocktailDB provider pointed at the mock server with the test key.
fn cocktaildb(server: &MockServer) -> CocktailDbProvider {
    CocktailDbProvider::new(Some(server.uri()), Some("1".to_string()))
}

fn drink_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "idDrink": id,
        "strDrink": name,
        "strCategory": "Cocktail",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Highball glass",
        "strInstructions": "Muddle mint leaves with sugar and lime juice.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/mojito.jpg",
        "strIngredient1": "Light rum",
        "strMeasure1": "2-3 oz ",
        "strIngredient2": "Lime",
        "strMeasure2": "Juice of 1 ",
        "strIngredient3": null,
        "strMeasure3": null
    })
}

// ============================================================================
// CocktailDB Provider Tests
// ============================================================================

#[tokio::test]
async fn test_cocktaildb_search_by_first_letter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .and(query_param("f", "m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drinks": [drink_json("11000", "Mojito"), drink_json("11007", "Margarita")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    // Upper case is normalized before the request goes out
    let drinks = provider.search_by_first_letter('M').await.unwrap();

    assert_eq!(drinks.len(), 2);
    assert_eq!(drinks[0].id, "11000");
    assert_eq!(drinks[0].display_name(), "Mojito");
    let ingredients = drinks[0].ingredients();
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0].name, "Light rum");
    assert_eq!(ingredients[0].measure.as_deref(), Some("2-3 oz"));
}

#[tokio::test]
async fn test_cocktaildb_null_drinks_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .and(query_param("f", "x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "drinks": null })))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let drinks = provider.search_by_first_letter('x').await.unwrap();
    assert!(drinks.is_empty());
}

#[tokio::test]
async fn test_cocktaildb_empty_body_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let drinks = provider.search_by_name("zzz").await.unwrap();
    assert!(drinks.is_empty());
}

#[tokio::test]
async fn test_cocktaildb_lookup_found_and_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/lookup.php"))
        .and(query_param("i", "11000"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "drinks": [drink_json("11000", "Mojito")] })),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/lookup.php"))
        .and(query_param("i", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "drinks": null })))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);

    let found = provider.lookup("11000").await.unwrap();
    assert_eq!(found.unwrap().glass.as_deref(), Some("Highball glass"));

    let missing = provider.lookup("0").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_cocktaildb_random() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/random.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "drinks": [drink_json("17222", "A1")] })),
        )
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let drink = provider.random().await.unwrap().unwrap();
    assert_eq!(drink.display_name(), "A1");
}

#[tokio::test]
async fn test_cocktaildb_filter_by_ingredient() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/filter.php"))
        .and(query_param("i", "Gin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drinks": [
                { "strDrink": "Gin Fizz", "strDrinkThumb": "https://img/ginfizz.jpg", "idDrink": "11403" },
                { "strDrink": "Bramble", "strDrinkThumb": "https://img/bramble.jpg", "idDrink": "178311" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let drinks = Spirit::Gin.fetch_drinks(&provider).await.unwrap();

    assert_eq!(drinks.len(), 2);
    assert_eq!(drinks[1].name, "Bramble");
    assert_eq!(drinks[1].id, "178311");
}

#[tokio::test]
async fn test_cocktaildb_non_alcoholic_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/filter.php"))
        .and(query_param("a", "Non_Alcoholic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drinks": [{ "strDrink": "Virgin Mojito", "idDrink": "1" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let drinks = Spirit::NonAlcoholic.fetch_drinks(&provider).await.unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].thumbnail, None);
}

#[tokio::test]
async fn test_cocktaildb_filter_no_data_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/filter.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "drinks": "no data found" })),
        )
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let drinks = provider.filter_by_ingredient("Unobtainium").await.unwrap();
    assert!(drinks.is_empty());
}

#[tokio::test]
async fn test_cocktaildb_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let result = provider.search_by_first_letter('a').await;

    match result {
        Err(ProviderError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cocktaildb_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/random.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    assert!(matches!(
        provider.random().await,
        Err(ProviderError::Parse(_))
    ));
}

// ============================================================================
// Aggregate Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_catalog_against_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .and(query_param("f", "m"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drinks": [drink_json("11000", "Mojito"), drink_json("11007", "Margarita")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .and(query_param("f", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drinks": [drink_json("17222", "A1")]
        })))
        .mount(&mock_server)
        .await;

    // Every other letter: no drinks
    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "drinks": null })))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let catalog = fetch_catalog(&provider).await.unwrap();

    let labels: Vec<&str> = catalog.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["A1", "Margarita", "Mojito"]);
    assert_eq!(catalog.index().lookup('a'), Some(0));
    assert_eq!(catalog.index().lookup('M'), Some(1));
    assert_eq!(catalog.index().lookup('b'), None);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 26);
}

#[tokio::test]
async fn test_fetch_catalog_fails_when_api_down() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/search.php"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let result = fetch_catalog(&provider).await;
    assert!(matches!(result, Err(ProviderError::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_fetch_random_collects_drinks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/random.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "drinks": [drink_json("11000", "Mojito")] })),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let provider = cocktaildb(&mock_server);
    let drinks = fetch_random(&provider, 3).await;
    // The same drink three times collapses to one
    assert_eq!(drinks.len(), 1);
}

// ============================================================================
// Firestore Tests
// ============================================================================

#[tokio::test]
async fn test_firestore_fetches_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/demo/databases/(default)/documents/adjectives/3"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/demo/databases/(default)/documents/adjectives/3",
            "fields": { "name": { "stringValue": "Mysterious" } },
            "createTime": "2024-01-01T00:00:00Z",
            "updateTime": "2024-01-01T00:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let store = FirestoreStore::new(
        Some(mock_server.uri()),
        "demo".to_string(),
        Some("test-key".to_string()),
    )
    .unwrap();

    let doc = store.get("adjectives", "3").await.unwrap().unwrap();
    assert_eq!(doc.id, "3");
    assert_eq!(doc.string_field("name"), Some("Mysterious"));
}

#[tokio::test]
async fn test_firestore_missing_document_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/demo/databases/(default)/documents/names/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "Document not found", "status": "NOT_FOUND" }
        })))
        .mount(&mock_server)
        .await;

    let store = FirestoreStore::new(Some(mock_server.uri()), "demo".to_string(), None).unwrap();
    assert!(store.get("names", "99").await.unwrap().is_none());
}

#[tokio::test]
async fn test_firestore_permission_denied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("PERMISSION_DENIED"))
        .mount(&mock_server)
        .await;

    let store = FirestoreStore::new(Some(mock_server.uri()), "demo".to_string(), None).unwrap();
    assert!(matches!(
        store.get("ingredients", "1").await,
        Err(FirebaseError::Api { status: 403, .. })
    ));
}

// ============================================================================
// Firebase Storage Tests
// ============================================================================

#[tokio::test]
async fn test_storage_resolves_download_url_with_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/b/test-bucket/o/button-image%2Fgin.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "button-image/gin.jpg",
            "bucket": "test-bucket",
            "contentType": "image/jpeg",
            "downloadTokens": "abc-123"
        })))
        .mount(&mock_server)
        .await;

    let resolver =
        FirebaseStorageResolver::new(Some(mock_server.uri()), "test-bucket".to_string()).unwrap();
    let url = resolver.resolve(&Spirit::Gin.image_path()).await.unwrap();

    assert_eq!(
        url,
        format!(
            "{}/v0/b/test-bucket/o/button-image%2Fgin.jpg?alt=media&token=abc-123",
            mock_server.uri()
        )
    );
}

#[tokio::test]
async fn test_storage_missing_object_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let resolver =
        FirebaseStorageResolver::new(Some(mock_server.uri()), "test-bucket".to_string()).unwrap();
    assert!(matches!(
        resolver.resolve("button-image/rum.jpg").await,
        Err(FirebaseError::Api { status: 404, .. })
    ));
}
