pub mod check;
pub mod render;
pub mod routes;
pub mod serve;

use std::path::Path;

use anyhow::Result;
use folio::{Config, SiteContent};
use tracing::debug;

/// Reads folio.toml and the content it points at
pub fn load(config_path: &Path) -> Result<(Config, SiteContent)> {
    let config = Config::load(config_path)?;
    let content = SiteContent::load_or_builtin(config.content.path.as_deref().map(Path::new))?;

    debug!(
        config = %config_path.display(),
        content = config.content.path.as_deref().unwrap_or("built-in"),
        "configuration loaded"
    );
    Ok((config, content))
}
