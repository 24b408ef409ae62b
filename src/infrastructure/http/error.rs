//! HTTP Error Handling
//!
//! 错误页沿用常见 Web 框架的默认格式：
//! 404 返回 `Cannot GET /path`，500 返回 `Internal Server Error`

use std::any::Any;

use axum::{
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound { method: Method, path: String },
    Internal(String),
}

impl ApiError {
    pub fn not_found(method: Method, path: impl Into<String>) -> Self {
        ApiError::NotFound {
            method,
            path: path.into(),
        }
    }
}

fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Error</title>\n</head>\n<body>\n<pre>{}</pre>\n</body>\n</html>\n",
        escape_html(message)
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound { method, path } => {
                tracing::debug!(method = %method, path = %path, "No route matched");
                (StatusCode::NOT_FOUND, format!("Cannot {} {}", method, path))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Html(error_page(&message))).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(format!("Failed to serialize payload: {}", e))
    }
}

/// CatchPanicLayer 回调：handler panic 时返回 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    ApiError::Internal(format!("Handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_page() {
        let response = ApiError::not_found(Method::GET, "/home/missing.txt").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );
        assert!(body_string(response)
            .await
            .contains("<pre>Cannot GET /home/missing.txt</pre>"));
    }

    #[tokio::test]
    async fn test_not_found_escapes_path() {
        let response = ApiError::not_found(Method::POST, "/<script>").into_response();
        let body = body_string(response).await;
        assert!(body.contains("Cannot POST /&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(body.contains("Internal Server Error"));
        assert!(!body.contains("boom"));
    }
}
