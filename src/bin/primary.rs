//! Primary fixture - 端口 4001
//!
//! 静态文件 `/home/*`，`GET /api`（延迟 < 1s），`POST /file`、`/html`、`/json`

use testservers::{run_fixture, FixtureKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_fixture(FixtureKind::Primary).await
}
