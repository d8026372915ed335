use axum::extract::Path;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserReply {
    pub user_name: String,
}

/// `GET /users/{name}` — echoes the (percent-decoded) name back.
pub async fn get_user(Path(name): Path<String>) -> Json<UserReply> {
    Json(UserReply { user_name: name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/users/{name}", get(get_user))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn echoes_the_name() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/users/alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"user_name": "alice"}));
    }

    #[tokio::test]
    async fn decodes_percent_encoded_segments() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/users/bob%20ross")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"user_name": "bob ross"}));
    }

    #[tokio::test]
    async fn accepts_unicode_names() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/users/ren%C3%A9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"user_name": "rené"}));
    }

    #[tokio::test]
    async fn numeric_segments_are_still_names() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/users/123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"user_name": "123"}));
    }
}
