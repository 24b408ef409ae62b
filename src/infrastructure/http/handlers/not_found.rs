//! Not Found Handler
//!
//! 未知路径、方法不匹配、静态文件缺失共用

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::infrastructure::http::error::ApiError;

pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found(method, uri.path())
}
