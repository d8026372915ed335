use axum::Json;

/// `GET /` — the hello-world endpoint, a JSON string literal.
pub async fn root() -> Json<&'static str> {
    Json("Hello World!")
}
