//! JSON extractor whose rejections use the API error envelope

use axum::{
    extract::{rejection::JsonRejection as AxumJsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Drop-in replacement for `axum::Json`.
///
/// Malformed bodies are reported as `ApiError` so clients always see the
/// same `{"error": {...}}` shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        AxumJson::<T>::from_request(req, state)
            .await
            .map(|AxumJson(value)| Json(value))
            .map_err(rejection_to_error)
    }
}

fn rejection_to_error(rejection: AxumJsonRejection) -> ApiError {
    let status = rejection.status();
    let message = match &rejection {
        AxumJsonRejection::JsonDataError(err) => format!("Invalid request body: {}", err.body_text()),
        AxumJsonRejection::JsonSyntaxError(err) => format!("Malformed JSON: {}", err.body_text()),
        AxumJsonRejection::MissingJsonContentType(_) => {
            "Expected a request body with Content-Type 'application/json'.".to_string()
        }
        other => other.body_text(),
    };

    let mut error = ApiError::bad_request(message).with_code("invalid_json");
    error.status = status;
    error
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct KeywordBody {
        keyword: String,
    }

    fn json_request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let request = json_request(Some("application/json"), r#"{"keyword":"anchor"}"#);
        let Json(body) = Json::<KeywordBody>::from_request(request, &()).await.unwrap();
        assert_eq!(body.keyword, "anchor");
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let request = json_request(Some("application/json"), "{not json");
        let err = Json::<KeywordBody>::from_request(request, &()).await.unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code, Some("invalid_json".to_string()));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = json_request(None, r#"{"keyword":"anchor"}"#);
        let err = Json::<KeywordBody>::from_request(request, &()).await.unwrap_err();

        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(err.response.error.message.contains("application/json"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_unprocessable() {
        let request = json_request(Some("application/json"), r#"{"keyword":42}"#);
        let err = Json::<KeywordBody>::from_request(request, &()).await.unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
