//! Latency Profile - 模拟响应延迟
//!
//! 在 `[0, max)` 上均匀采样，`max` 为零时不延迟。

use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    max: Duration,
}

impl LatencyProfile {
    pub fn new(max: Duration) -> Self {
        Self { max }
    }

    pub fn from_millis(max_ms: u64) -> Self {
        Self::new(Duration::from_millis(max_ms))
    }

    /// 不延迟
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// 使用线程本地 RNG 采样
    pub fn sample(&self) -> Duration {
        self.sample_with(&mut rand::thread_rng())
    }

    /// 纳秒粒度均匀采样，结果严格小于 `max`
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let max_nanos = u64::try_from(self.max.as_nanos()).unwrap_or(u64::MAX);
        if max_nanos == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(rng.gen_range(0..max_nanos))
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::none()
    }
}
