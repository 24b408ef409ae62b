//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

mod stderr_sink;

pub use stderr_sink::StderrHeaderSink;
