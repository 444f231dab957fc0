use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        continents::{
            create_continent, delete_continent, get_continent, list_continents, update_continent,
        },
        countries::{
            create_country, delete_country, get_country, list_countries, list_countries_after,
            search_country, update_country,
        },
        health::{index, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        // Continent routes
        .route("/continents", get(list_continents).post(create_continent))
        .route(
            "/continents/{code}",
            get(get_continent)
                .put(update_continent)
                .delete(delete_continent),
        )
        // Country routes
        .route("/countries", get(list_countries).post(create_country))
        .route("/countries/after", get(list_countries_after))
        .route("/countries/search/{name}", get(search_country))
        .route(
            "/countries/{code}",
            get(get_country).put(update_country).delete(delete_country),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn app() -> Router {
        create_app(AppState::in_memory().await.unwrap())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_index_returns_welcome_message() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("country"));
    }

    #[tokio::test]
    async fn test_livez() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_continents_empty() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/continents")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_continent() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/continents",
                r#"{"code":"AS","name":"Asia"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/continents/AS")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["code"], "AS");
        assert_eq!(json["name"], "Asia");
        assert!(json["updated_at"].is_string());
    }

    #[tokio::test]
    async fn test_duplicate_continent_conflicts() {
        let app = app().await;

        let body = r#"{"code":"EU","name":"Europe"}"#;
        let response = app
            .clone()
            .oneshot(json_request("POST", "/continents", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request("POST", "/continents", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_nonexistent_continent() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/continents/ZZ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_continent_partial() {
        let app = app().await;

        app.clone()
            .oneshot(json_request(
                "POST",
                "/continents",
                r#"{"code":"OC","name":"Oceanai"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/continents/OC",
                r#"{"name":"Oceania"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["name"], "Oceania");
    }

    #[tokio::test]
    async fn test_delete_continent() {
        let app = app().await;

        app.clone()
            .oneshot(json_request(
                "POST",
                "/continents",
                r#"{"code":"AF","name":"Africa"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/continents/AF")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/continents/AF")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_country_with_unknown_continent_is_bad_request() {
        let response = app()
            .await
            .oneshot(json_request(
                "POST",
                "/countries",
                r#"{"code":"JP","name":"Japan","full_name":"Japan","iso3":"JPN","number":392,"continent_code":"AS"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_country_crud_and_search() {
        let app = app().await;

        app.clone()
            .oneshot(json_request(
                "POST",
                "/continents",
                r#"{"code":"AS","name":"Asia"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/countries",
                r#"{"code":"JP","name":"Japan","full_name":"State of Japan","iso3":"JPN","number":392,"continent_code":"AS"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Lookup by code
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/countries/JP")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Search by name
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/countries/search/Japan")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["code"], "JP");
        assert_eq!(json["full_name"], "State of Japan");

        // Partial update
        let response = app
            .clone()
            .oneshot(json_request("PUT", "/countries/JP", r#"{"number":393}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["number"], 393);
        assert_eq!(json["name"], "Japan");

        // Delete
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/countries/JP")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/countries/JP")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_countries_pagination() {
        let app = app().await;

        app.clone()
            .oneshot(json_request(
                "POST",
                "/continents",
                r#"{"code":"AS","name":"Asia"}"#,
            ))
            .await
            .unwrap();
        for (code, name, iso3, number) in
            [("CN", "China", "CHN", 156), ("IN", "India", "IND", 356), ("JP", "Japan", "JPN", 392)]
        {
            let body = format!(
                r#"{{"code":"{code}","name":"{name}","full_name":"{name}","iso3":"{iso3}","number":{number},"continent_code":"AS"}}"#
            );
            app.clone()
                .oneshot(json_request("POST", "/countries", &body))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/countries?skip=1&limit=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let codes: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["IN"]);
    }

    #[tokio::test]
    async fn test_list_countries_updated_after() {
        let app = app().await;

        app.clone()
            .oneshot(json_request(
                "POST",
                "/continents",
                r#"{"code":"AS","name":"Asia"}"#,
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/countries",
                r#"{"code":"JP","name":"Japan","full_name":"Japan","iso3":"JPN","number":392,"continent_code":"AS"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/countries?updated_after=2000-01-01T00:00:00Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/countries?updated_after=2999-01-01T00:00:00Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_countries_after_requires_timestamp() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .uri("/countries/after")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_countries_after_returns_newer_rows() {
        let app = app().await;

        app.clone()
            .oneshot(json_request(
                "POST",
                "/continents",
                r#"{"code":"AS","name":"Asia"}"#,
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/countries",
                r#"{"code":"JP","name":"Japan","full_name":"Japan","iso3":"JPN","number":392,"continent_code":"AS"}"#,
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/countries/after?last_updated_at=2000-01-01T00:00:00Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["code"], "JP");
    }
}
