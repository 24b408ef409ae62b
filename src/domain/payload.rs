//! Payload - 固定响应内容
//!
//! 每个端点对应一种 `ContentKind`，每种 `ContentKind` 对应唯一的 Content-Type。

use serde::Serialize;

use super::fixture::Endpoint;

/// `/file` 返回的二进制内容
pub const BINARY_DATA: &[u8] = b"This is some binary data";

/// `/html` 返回的页面
pub const HTML_PAGE: &str = "<html><body><h1>Hello, World!</h1></body></html>";

/// 响应内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Binary,
    Html,
}

impl ContentKind {
    pub fn content_type(&self) -> &'static str {
        match self {
            ContentKind::Json => "application/json; charset=utf-8",
            ContentKind::Binary => "application/octet-stream",
            ContentKind::Html => "text/html; charset=utf-8",
        }
    }
}

/// `/api` 响应体
#[derive(Debug, Clone, Serialize)]
pub struct ContentBody {
    pub content: &'static str,
}

impl Default for ContentBody {
    fn default() -> Self {
        Self {
            content: "some content",
        }
    }
}

/// `/json` 响应体
#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub name: &'static str,
    pub email: &'static str,
}

impl Default for ContactCard {
    fn default() -> Self {
        Self {
            name: "John Doe",
            email: "john.doe@example.com",
        }
    }
}

/// 响应内容
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// 已序列化的 JSON，保持字段声明顺序
    Json(Vec<u8>),
    Binary(&'static [u8]),
    Html(&'static str),
}

impl Payload {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Payload::Json(serde_json::to_vec(value)?))
    }

    /// 端点的固定响应
    pub fn for_endpoint(endpoint: Endpoint) -> Result<Self, serde_json::Error> {
        match endpoint {
            Endpoint::DelayedContent => Payload::json(&ContentBody::default()),
            Endpoint::BinaryData => Ok(Payload::Binary(BINARY_DATA)),
            Endpoint::HtmlPage => Ok(Payload::Html(HTML_PAGE)),
            Endpoint::ContactJson => Payload::json(&ContactCard::default()),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Payload::Json(_) => ContentKind::Json,
            Payload::Binary(_) => ContentKind::Binary,
            Payload::Html(_) => ContentKind::Html,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Json(bytes) => bytes,
            Payload::Binary(bytes) => bytes.to_vec(),
            Payload::Html(html) => html.as_bytes().to_vec(),
        }
    }
}
