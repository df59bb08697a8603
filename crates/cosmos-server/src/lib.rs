pub mod config;
pub mod cors;
mod routes;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::path::Path;

use anyhow::Result;
use tokio::net::TcpListener;

pub use routes::{build_router, AppState, InnerAppState};

pub async fn serve(listener: TcpListener, state: AppState, static_dir: &Path) -> Result<()> {
    let app = routes::build_router(state, static_dir);
    axum::serve(listener, app).await?;
    Ok(())
}
