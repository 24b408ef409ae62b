//! HTTP Layer - 测试桩路由与服务器

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{create_routes, StaticMount};
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
