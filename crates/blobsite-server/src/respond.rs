use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use blobsite_router::RouteDecision;
use blobsite_store::FetchedObject;

/// Map a routing decision onto an HTTP response.
///
/// Error details never appear in response bodies; 401/404/500 are empty.
pub fn decision_response(decision: RouteDecision, base_uri: &str) -> Response {
    match decision {
        RouteDecision::Redirect(target) => redirect_response(&format!("{base_uri}{target}")),
        RouteDecision::Serve { object, .. } => object_response(object),
        RouteDecision::NotFound => StatusCode::NOT_FOUND.into_response(),
        RouteDecision::ServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// The unauthorized response. Kept here so every non-2xx body policy lives
/// in one module.
pub fn unauthorized_response() -> Response {
    StatusCode::UNAUTHORIZED.into_response()
}

fn redirect_response(location: &str) -> Response {
    let Ok(value) = HeaderValue::from_str(location) else {
        tracing::error!("redirect location not header-safe: {location}");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let mut response = StatusCode::MOVED_PERMANENTLY.into_response();
    response.headers_mut().insert(header::LOCATION, value);
    response
}

/// 200 with streamed content. Content type and entity tag go on before any
/// body bytes are written; an absent entity tag is simply omitted.
fn object_response(object: FetchedObject) -> Response {
    let mut builder = Response::builder().status(StatusCode::OK).header(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&object.content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );
    if !object.etag.is_empty() {
        if let Ok(value) = HeaderValue::from_str(&object.etag) {
            builder = builder.header(header::ETAG, value);
        }
    }
    match builder.body(Body::from_stream(object.content)) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("failed to build object response: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobsite_store::ObjectKey;
    use bytes::Bytes;
    use http_body_util::BodyExt;

    fn serve_decision(content_type: &str, etag: &str) -> RouteDecision {
        RouteDecision::Serve {
            key: ObjectKey::from_path("/a.html"),
            object: FetchedObject::from_bytes(Bytes::from_static(b"<p>hi</p>"), content_type, etag),
        }
    }

    #[tokio::test]
    async fn serve_maps_to_200_with_headers_and_body() {
        let response = decision_response(serve_decision("text/html", "\"tag\""), "http://host");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(response.headers()[header::ETAG], "\"tag\"");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(b"<p>hi</p>"));
    }

    #[tokio::test]
    async fn empty_etag_is_omitted() {
        let response = decision_response(serve_decision("text/html", ""), "http://host");
        assert!(!response.headers().contains_key(header::ETAG));
    }

    #[test]
    fn redirect_maps_to_301_with_location() {
        let response = decision_response(
            RouteDecision::Redirect("/docs/".into()),
            "http://example.test",
        );
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers()[header::LOCATION],
            "http://example.test/docs/"
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_empty_404() {
        let response = decision_response(RouteDecision::NotFound, "http://host");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn server_error_leaks_nothing() {
        let response = decision_response(
            RouteDecision::ServerError {
                code: "ServerBusy".into(),
                message: "secret backend detail".into(),
            },
            "http://host",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[test]
    fn unauthorized_is_401() {
        assert_eq!(unauthorized_response().status(), StatusCode::UNAUTHORIZED);
    }
}
