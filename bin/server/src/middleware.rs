use axum::{
    extract::Request,
    http::{header, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Content-type gate for the API router.
///
/// POST bodies must declare `application/json` (parameters such as a
/// charset are allowed) or the request is rejected with the 400
/// envelope before any handler runs.
pub async fn require_json(req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        let declares_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| {
                v.split(';')
                    .next()
                    .unwrap_or("")
                    .trim()
                    .eq_ignore_ascii_case("application/json")
            })
            .unwrap_or(false);

        if !declares_json {
            return ApiError::BadRequest("Content-Type debe ser application/json".to_string())
                .into_response();
        }
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::test_support::{body_json, stub_app};

    async fn post_with_content_type(content_type: Option<&str>) -> axum::response::Response {
        let (app, _client) = stub_app(Ok("irrelevante"));
        let mut builder = Request::builder().method("POST").uri("/api/chat");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        app.oneshot(
            builder
                .body(Body::from(r#"{"message": "hola"}"#))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn post_without_json_content_type_is_rejected() {
        let response = post_with_content_type(Some("text/plain")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Content-Type debe ser application/json");

        let response = post_with_content_type(None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn media_types_merely_prefixed_with_json_are_rejected() {
        let response = post_with_content_type(Some("application/jsonx")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Content-Type debe ser application/json");
    }

    #[tokio::test]
    async fn json_content_type_with_charset_is_accepted() {
        let response = post_with_content_type(Some("application/json; charset=utf-8")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
