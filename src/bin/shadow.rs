//! Shadow fixture - 端口 4002
//!
//! 静态文件 `/home/*`，`GET /api`（延迟 < 10ms）

use testservers::{run_fixture, FixtureKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_fixture(FixtureKind::Shadow).await
}
