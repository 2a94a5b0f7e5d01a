//! Assemble a [`ConfigStore`] from a properties file and `--set` overrides.

use kaptcha_config::ConfigStore;
use tracing::debug;

use crate::{cli::SourceArgs, error::Result};

/// Entries from `--config`, with `--set` overrides layered on top.
pub fn load(args: &SourceArgs) -> Result<ConfigStore> {
    let base = match &args.config {
        Some(path) => {
            let store = ConfigStore::load_properties(path)?;
            debug!(path = %path.display(), entries = store.len(), "loaded properties");
            store
        }
        None => ConfigStore::new(),
    };
    let overrides: ConfigStore = args.overrides.iter().cloned().collect();
    Ok(ConfigStore::merged(&base, &overrides))
}
