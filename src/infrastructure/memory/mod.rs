//! Memory Layer - In-Memory Implementations
//!
//! 内存版 HeaderSink，供测试观察请求头转储

mod header_sink;

pub use header_sink::InMemoryHeaderSink;
