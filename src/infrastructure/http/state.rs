//! Application State
//!
//! 每个进程一份，请求间只读共享

use std::sync::Arc;

use crate::application::HeaderSinkPort;
use crate::domain::{FixtureKind, LatencyProfile};

/// 应用状态
pub struct AppState {
    pub fixture: FixtureKind,
    pub latency: LatencyProfile,
    pub header_sink: Arc<dyn HeaderSinkPort>,
}

impl AppState {
    pub fn new(
        fixture: FixtureKind,
        latency: LatencyProfile,
        header_sink: Arc<dyn HeaderSinkPort>,
    ) -> Self {
        Self {
            fixture,
            latency,
            header_sink,
        }
    }
}
