use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Request, Response};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::config::Environment;
use crate::error::ErrorResponse;

/// Layer that rewrites non-JSON error responses into the standard
/// `{code, message}` JSON body.
///
/// Success responses and error responses that already carry a JSON body
/// pass through untouched. In production the upstream body text is
/// replaced by the status's canonical reason.
#[derive(Clone, Copy)]
pub struct ErrorBodyLayer {
    environment: Environment,
}

impl ErrorBodyLayer {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl<S> Layer<S> for ErrorBodyLayer {
    type Service = ErrorBodyService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ErrorBodyService {
            inner,
            environment: self.environment,
        }
    }
}

#[derive(Clone)]
pub struct ErrorBodyService<S> {
    inner: S,
    environment: Environment,
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

impl<S, B> Service<Request<Body>> for ErrorBodyService<S>
where
    S: Service<Request<Body>, Response = Response<B>> + Clone + Send + 'static,
    S::Future: Send,
    B: axum::body::HttpBody<Data = axum::body::Bytes> + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let redact = self.environment.is_production();

        Box::pin(async move {
            let response = inner.call(req).await?;
            let status = response.status();

            let is_error = status.is_client_error() || status.is_server_error();
            if !is_error || is_json(response.headers()) {
                let (parts, body) = response.into_parts();
                return Ok(Response::from_parts(parts, Body::new(body)));
            }

            let (parts, body) = response.into_parts();
            let bytes = body
                .collect()
                .await
                .map(|b| b.to_bytes())
                .unwrap_or_default();
            let body_text = String::from_utf8_lossy(&bytes);

            let message = if body_text.is_empty() || redact {
                status.canonical_reason().unwrap_or("Error")
            } else {
                &body_text
            };

            let error = ErrorResponse::from_status(status, message);
            let mut response = (status, axum::Json(error)).into_response();
            *response.headers_mut() = parts.headers;
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );

            Ok(response)
        })
    }
}
