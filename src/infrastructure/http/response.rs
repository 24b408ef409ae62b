//! Payload Response
//!
//! 按 `ContentKind` 表设置 Content-Type

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::Payload;

impl IntoResponse for Payload {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_static(self.kind().content_type());
        let body = self.into_bytes();

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = StatusCode::OK;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
        response
    }
}
