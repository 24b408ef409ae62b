//! Domain Layer - 测试桩领域模型
//!
//! - fixture: 桩种类与固定路由表
//! - latency: 延迟采样
//! - payload: 固定响应内容与 Content-Type 表

pub mod fixture;
pub mod latency;
pub mod payload;

pub use fixture::{Endpoint, FixtureKind, RouteMethod};
pub use latency::LatencyProfile;
pub use payload::{ContactCard, ContentBody, ContentKind, Payload, BINARY_DATA, HTML_PAGE};
