use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::Catalog;

/// Coupon lookup response.
///
/// A miss is not an error: it returns 200 with the sentinel code
/// `"Not Found"` and no `discount` field at all. The found/not-found
/// shapes are deliberately asymmetric; clients depend on the missing
/// key.
#[derive(Debug, Serialize)]
pub struct CouponReply {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<&'static str>,
}

/// `GET /cupons/{cupon_id}` — looks up a coupon by integer id.
///
/// The `cupons` spelling is the published path; keep it.
pub async fn get_cupon(
    State(catalog): State<Catalog>,
    Path(cupon_id): Path<i64>,
) -> Json<CouponReply> {
    let reply = match catalog.coupon(cupon_id) {
        Some(coupon) => CouponReply {
            code: coupon.code,
            discount: Some(coupon.discount),
        },
        None => CouponReply {
            code: "Not Found",
            discount: None,
        },
    };

    Json(reply)
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
        Router::new()
            .route("/cupons/{cupon_id}", get(get_cupon))
            .with_state(Catalog::seed())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn known_ids_return_code_and_discount() {
        let cases = [
            (1, "abc123", "10%"),
            (2, "xyz789", "20%"),
            (3, "pqr456", "30%"),
        ];

        for (id, code, discount) in cases {
            let response = app()
                .oneshot(
                    Request::builder()
                        .uri(format!("/cupons/{id}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_json(response).await,
                json!({"code": code, "discount": discount})
            );
        }
    }

    #[tokio::test]
    async fn unknown_id_returns_sentinel_without_discount_key() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/cupons/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // A miss is a 200 with the sentinel payload, not a 404.
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["code"], "Not Found");
        assert!(body.get("discount").is_none());
    }

    #[tokio::test]
    async fn negative_and_zero_ids_are_valid_misses() {
        for uri in ["/cupons/0", "/cupons/-5"] {
            let response = app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!({"code": "Not Found"}));
        }
    }

    #[tokio::test]
    async fn rejects_non_integer_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/cupons/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
