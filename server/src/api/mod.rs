pub mod docs;
pub mod ingredients;
pub mod recipes;
pub mod restaurants;
pub mod shopping_list;
pub mod system;
pub mod web_recipes;

use axum::routing::post;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Assemble the full application router (state applied by the caller).
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(system::router())
        .merge(docs::router())
        .nest("/api/ingredients", ingredients::router())
        .nest("/api/recipes", recipes::router())
        .route("/api/shopping-list", post(shopping_list::missing::shopping_list))
        .nest("/api/restaurants", restaurants::router())
        .nest("/api/web-recipes", web_recipes::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        system::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        shopping_list::ApiDoc::openapi(),
        restaurants::ApiDoc::openapi(),
        web_recipes::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppContext;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use souschef_core::{
        FailingPlaces, FakeSearch, MemoryCatalog, MockClassifier, PlacesProvider, SearchHit,
        StaticPlaces, WebSearchProvider,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn canned_hits() -> Vec<SearchHit> {
        vec![
            SearchHit {
                title: "Tomato Egg Stir Fry".to_string(),
                link: Some("https://short.example/stir-fry".to_string()),
                snippet: "Classic tomato egg dish".to_string(),
            },
            SearchHit {
                title: "Weeknight dinner roundup with dozens of unrelated ideas".to_string(),
                link: Some("https://long.example/roundup".to_string()),
                snippet: "Everything from casseroles to dessert".to_string(),
            },
        ]
    }

    fn state_with(
        places: Box<dyn PlacesProvider>,
        search: Option<Box<dyn WebSearchProvider>>,
    ) -> crate::AppState {
        Arc::new(AppContext {
            catalog: Arc::new(MemoryCatalog::seeded()),
            classifier: Box::new(MockClassifier::new()),
            places,
            search,
            match_threshold: 0.6,
        })
    }

    fn test_state() -> crate::AppState {
        state_with(
            Box::new(StaticPlaces::new()),
            Some(Box::new(FakeSearch::with_hits(canned_hits()))),
        )
    }

    fn app(state: crate::AppState) -> Router {
        router().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(test_state()).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_lists_endpoints() {
        let response = app(test_state()).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["service"], "Souschef API");
        assert!(json["endpoints"].as_array().unwrap().len() >= 5);
    }

    #[tokio::test]
    async fn test_recommend_full_match_first() {
        let request = json_post(
            "/api/recipes/recommend",
            r#"{"ingredients":["tomato","egg","salt","oil"]}"#,
        );
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let recipes = json["recipes"].as_array().unwrap();
        assert_eq!(recipes[0]["id"], 1);
        assert_eq!(recipes[0]["match_ratio"], 1.0);
    }

    #[tokio::test]
    async fn test_recommend_rejects_empty_ingredients() {
        let request = json_post("/api/recipes/recommend", r#"{"ingredients":["  ", ""]}"#);
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_shopping_list_missing() {
        let request = json_post(
            "/api/shopping-list",
            r#"{"recipe_id":3,"ingredients":["Egg"," cucumber "]}"#,
        );
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let missing = json["missing"].as_array().unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0]["ingredient"], "salt");
        assert_eq!(missing[0]["qty"], "pinch");
    }

    #[tokio::test]
    async fn test_shopping_list_unknown_recipe_is_404() {
        let request = json_post(
            "/api/shopping-list",
            r#"{"recipe_id":999,"ingredients":["egg"]}"#,
        );
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "recipe not found");
    }

    #[tokio::test]
    async fn test_restaurant_search_defaults() {
        let response = app(test_state())
            .oneshot(get("/api/restaurants/search"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["cuisine"], "Italian");
        assert_eq!(json["results"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_restaurant_search_invalid_coordinates() {
        let response = app(test_state())
            .oneshot(get("/api/restaurants/search?lat=abc&lng=1.0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_restaurant_search_degrades_to_empty_on_upstream_failure() {
        let state = state_with(Box::new(FailingPlaces), None);
        let response = app(state)
            .oneshot(get("/api/restaurants/search?cuisine=Thai"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["cuisine"], "Thai");
        assert!(json["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discover_ranks_results() {
        let request = json_post(
            "/api/web-recipes/discover",
            r#"{"ingredients":["tomato","egg"],"limit":5}"#,
        );
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["name"], "Tomato Egg Stir Fry");
        assert!(results[0]["ingredients"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discover_without_credentials_is_503() {
        let state = state_with(Box::new(StaticPlaces::new()), None);
        let request = json_post("/api/web-recipes/discover", r#"{"ingredients":["egg"]}"#);
        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_discover_degrades_to_empty_on_upstream_failure() {
        let state = state_with(
            Box::new(StaticPlaces::new()),
            Some(Box::new(FakeSearch::failing("connection reset"))),
        );
        let request = json_post("/api/web-recipes/discover", r#"{"ingredients":["egg"]}"#);
        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recognize_from_hint() {
        let request = json_post(
            "/api/ingredients/recognize",
            r#"{"mock_image_hint":"caprese salad"}"#,
        );
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let ingredients = json["ingredients"].as_array().unwrap();
        assert!(ingredients.contains(&serde_json::json!("mozzarella")));
        assert_eq!(json["freshness"]["mozzarella"], "fresh");
    }

    #[tokio::test]
    async fn test_recognize_upload_rejects_gif() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"cat.gif\"\r\nContent-Type: image/gif\r\n\r\nGIF89a\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/ingredients/recognize")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_recognize_upload_jpg() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"fridge.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n\u{00FF}\u{00D8}fake\r\n--{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/ingredients/recognize")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["ingredients"],
            serde_json::json!(["tomato", "egg", "salt", "oil"])
        );
    }

    #[tokio::test]
    async fn test_openapi_document_serves() {
        let response = app(test_state())
            .oneshot(get("/api-docs/openapi.json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/api/recipes/recommend"].is_object());
    }
}
