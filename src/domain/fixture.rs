//! Fixture - 测试桩种类与路由表
//!
//! 两个进程共用同一份代码，差异全部收敛在 `FixtureKind`：
//! 端口、延迟上限、路由表、配置文件名、环境变量前缀。

use std::fmt;

use super::payload::ContentKind;

/// 测试桩种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    /// 主桩，端口 4001
    Primary,
    /// 影子桩，端口 4002，只提供 `/api`
    Shadow,
}

impl FixtureKind {
    pub fn name(&self) -> &'static str {
        match self {
            FixtureKind::Primary => "primary",
            FixtureKind::Shadow => "shadow",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            FixtureKind::Primary => 4001,
            FixtureKind::Shadow => 4002,
        }
    }

    /// `/api` 延迟上限（毫秒，开区间）
    pub fn default_max_delay_ms(&self) -> u64 {
        match self {
            FixtureKind::Primary => 1000,
            FixtureKind::Shadow => 10,
        }
    }

    /// 环境变量前缀，例如 `SHADOW_FIXTURE_SERVER__PORT`
    pub fn env_prefix(&self) -> &'static str {
        match self {
            FixtureKind::Primary => "PRIMARY_FIXTURE",
            FixtureKind::Shadow => "SHADOW_FIXTURE",
        }
    }

    /// 可选配置文件（不含扩展名），按顺序合并
    pub fn config_file_names(&self) -> &'static [&'static str] {
        match self {
            FixtureKind::Primary => &["primary", "primary.local"],
            FixtureKind::Shadow => &["shadow", "shadow.local"],
        }
    }

    /// 固定路由表
    pub fn endpoints(&self) -> &'static [Endpoint] {
        match self {
            FixtureKind::Primary => &[
                Endpoint::DelayedContent,
                Endpoint::BinaryData,
                Endpoint::HtmlPage,
                Endpoint::ContactJson,
            ],
            FixtureKind::Shadow => &[Endpoint::DelayedContent],
        }
    }

    /// 按宽松规则匹配端点：忽略大小写和一个结尾 `/`
    pub fn match_endpoint(&self, path: &str) -> Option<Endpoint> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        self.endpoints()
            .iter()
            .copied()
            .find(|endpoint| endpoint.path().eq_ignore_ascii_case(path))
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 路由方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
        }
    }
}

/// 桩端点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /api` - 随机延迟后返回 JSON
    DelayedContent,
    /// `POST /file` - 固定二进制
    BinaryData,
    /// `POST /html` - 固定 HTML
    HtmlPage,
    /// `POST /json` - 固定 JSON
    ContactJson,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::DelayedContent => "/api",
            Endpoint::BinaryData => "/file",
            Endpoint::HtmlPage => "/html",
            Endpoint::ContactJson => "/json",
        }
    }

    pub fn method(&self) -> RouteMethod {
        match self {
            Endpoint::DelayedContent => RouteMethod::Get,
            _ => RouteMethod::Post,
        }
    }

    pub fn content_kind(&self) -> ContentKind {
        match self {
            Endpoint::DelayedContent | Endpoint::ContactJson => ContentKind::Json,
            Endpoint::BinaryData => ContentKind::Binary,
            Endpoint::HtmlPage => ContentKind::Html,
        }
    }

    pub fn is_delayed(&self) -> bool {
        matches!(self, Endpoint::DelayedContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_route_table() {
        let paths: Vec<_> = FixtureKind::Primary
            .endpoints()
            .iter()
            .map(|e| (e.method().as_str(), e.path()))
            .collect();
        assert_eq!(
            paths,
            vec![
                ("GET", "/api"),
                ("POST", "/file"),
                ("POST", "/html"),
                ("POST", "/json"),
            ]
        );
    }

    #[test]
    fn test_shadow_only_serves_api() {
        assert_eq!(FixtureKind::Shadow.endpoints(), &[Endpoint::DelayedContent]);
    }

    #[test]
    fn test_defaults_per_kind() {
        assert_eq!(FixtureKind::Primary.default_port(), 4001);
        assert_eq!(FixtureKind::Shadow.default_port(), 4002);
        assert_eq!(FixtureKind::Primary.default_max_delay_ms(), 1000);
        assert_eq!(FixtureKind::Shadow.default_max_delay_ms(), 10);
    }

    #[test]
    fn test_only_api_is_delayed() {
        for endpoint in FixtureKind::Primary.endpoints() {
            assert_eq!(endpoint.is_delayed(), *endpoint == Endpoint::DelayedContent);
        }
    }

    #[test]
    fn test_match_endpoint_ignores_case_and_trailing_slash() {
        let primary = FixtureKind::Primary;
        assert_eq!(primary.match_endpoint("/api"), Some(Endpoint::DelayedContent));
        assert_eq!(primary.match_endpoint("/api/"), Some(Endpoint::DelayedContent));
        assert_eq!(primary.match_endpoint("/API"), Some(Endpoint::DelayedContent));
        assert_eq!(primary.match_endpoint("/File"), Some(Endpoint::BinaryData));
        assert_eq!(primary.match_endpoint("/json/"), Some(Endpoint::ContactJson));
    }

    #[test]
    fn test_match_endpoint_rejects_other_paths() {
        let primary = FixtureKind::Primary;
        assert_eq!(primary.match_endpoint("/api//"), None);
        assert_eq!(primary.match_endpoint("/api/x"), None);
        assert_eq!(primary.match_endpoint("/"), None);
        assert_eq!(FixtureKind::Shadow.match_endpoint("/json"), None);
    }
}
