use std::sync::Arc;

use crate::config::AppConfig;
use crate::server::state::AppState;

pub mod cors;
pub mod extract;
pub mod router;
pub mod state;

pub async fn run_all(config: &AppConfig) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState::init(config));
    router::serve(app_state).await?;
    Ok(())
}
