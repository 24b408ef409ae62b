//! Header Dump - 请求头序列化
//!
//! 输出与 Node.js `req.headers` 一致：
//! - 键为小写头名，按首次出现的顺序输出
//! - `set-cookie` 输出为数组
//! - 单值头（`host`、`user-agent`、`content-type` 等）重复时只保留第一个
//! - `cookie` 用 `"; "` 连接，其余重复头用 `", "` 连接
//! - 非 UTF-8 值做有损转换

use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderName};
use serde::{Serialize, Serializer};

use super::ports::{HeaderSinkPort, SinkError};

/// 重复出现时只保留第一个值的头
const SINGLE_VALUE_HEADERS: &[&str] = &[
    "age",
    "authorization",
    "content-length",
    "content-type",
    "etag",
    "expires",
    "from",
    "host",
    "if-modified-since",
    "if-unmodified-since",
    "last-modified",
    "location",
    "max-forwards",
    "proxy-authorization",
    "referer",
    "retry-after",
    "server",
    "user-agent",
];

/// 转储错误
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum HeaderField {
    Single(String),
    List(Vec<String>),
}

/// 保持插入顺序的头集合
struct OrderedHeaders(Vec<(String, HeaderField)>);

impl Serialize for OrderedHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, field)| (name, field)))
    }
}

fn merge_values(name: &HeaderName, mut values: Vec<String>) -> HeaderField {
    if *name == SET_COOKIE {
        return HeaderField::List(values);
    }
    if SINGLE_VALUE_HEADERS.contains(&name.as_str()) {
        values.truncate(1);
        return HeaderField::Single(values.pop().unwrap_or_default());
    }
    let separator = if *name == COOKIE { "; " } else { ", " };
    HeaderField::Single(values.join(separator))
}

/// 将请求头渲染为单行 JSON 对象
pub fn render_headers(headers: &HeaderMap) -> Result<String, serde_json::Error> {
    // HeaderMap::keys 按首次插入顺序产出每个头名一次
    let fields = headers
        .keys()
        .map(|name| {
            let values = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect();
            (name.as_str().to_string(), merge_values(name, values))
        })
        .collect();

    serde_json::to_string(&OrderedHeaders(fields))
}

/// 渲染并写入 sink
pub fn dump_headers(headers: &HeaderMap, sink: &dyn HeaderSinkPort) -> Result<(), DumpError> {
    let line = render_headers(headers)?;
    sink.write_line(&line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCEPT, AUTHORIZATION, HOST, USER_AGENT};
    use http::HeaderValue;

    #[test]
    fn test_keys_keep_arrival_order() {
        let mut headers = HeaderMap::new();
        headers.append(USER_AGENT, HeaderValue::from_static("curl/8.0"));
        headers.append(HOST, HeaderValue::from_static("localhost:4001"));
        headers.append(ACCEPT, HeaderValue::from_static("*/*"));

        let line = render_headers(&headers).unwrap();
        assert_eq!(
            line,
            r#"{"user-agent":"curl/8.0","host":"localhost:4001","accept":"*/*"}"#
        );
    }

    #[test]
    fn test_single_value_headers_keep_first() {
        let mut headers = HeaderMap::new();
        headers.append(USER_AGENT, HeaderValue::from_static("x"));
        headers.append(HOST, HeaderValue::from_static("localhost"));
        headers.append(HOST, HeaderValue::from_static("evil"));
        headers.append(AUTHORIZATION, HeaderValue::from_static("Bearer a"));
        headers.append(AUTHORIZATION, HeaderValue::from_static("Bearer b"));

        let line = render_headers(&headers).unwrap();
        assert_eq!(
            line,
            r#"{"user-agent":"x","host":"localhost","authorization":"Bearer a"}"#
        );
    }

    #[test]
    fn test_repeated_headers_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append(ACCEPT, HeaderValue::from_static("text/html"));
        headers.append(ACCEPT, HeaderValue::from_static("application/json"));
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("b=2"));

        let line = render_headers(&headers).unwrap();
        assert_eq!(
            line,
            r#"{"accept":"text/html, application/json","cookie":"a=1; b=2"}"#
        );
    }

    #[test]
    fn test_set_cookie_is_an_array() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));

        assert_eq!(render_headers(&headers).unwrap(), r#"{"set-cookie":["a=1"]}"#);

        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
        assert_eq!(
            render_headers(&headers).unwrap(),
            r#"{"set-cookie":["a=1","b=2"]}"#
        );
    }

    #[test]
    fn test_empty_headers() {
        assert_eq!(render_headers(&HeaderMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_non_utf8_value_is_lossy() {
        let mut headers = HeaderMap::new();
        headers.insert("x-raw", HeaderValue::from_bytes(&[b'a', 0xFF]).unwrap());

        let parsed: serde_json::Value =
            serde_json::from_str(&render_headers(&headers).unwrap()).unwrap();
        assert_eq!(parsed["x-raw"], "a\u{FFFD}");
    }
}
