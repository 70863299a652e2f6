//! Catalog source selection for CLI commands.
//!
//! Responsibilities:
//! - Build the loader chain: `--config`, then `KEYSHEET_CONFIG_PATH`, then the
//!   bundled document.
//! - Report which source was used and how many entries were excluded.
//!
//! Does NOT handle:
//! - Library directories (see `commands::library`).

use anyhow::{Context, Result};
use keysheet_catalog::{CatalogLoader, LoadedCatalog, NormalizeOptions};
use std::path::Path;

/// Shortcut document compiled into the binary, used when no file is usable.
pub const BUNDLED_DOCUMENT: &str = include_str!("../assets/shortcuts.json");

/// Load the catalog from the first usable source.
///
/// Disabled entries are kept (still flagged) so display views can show them
/// on request.
pub fn load_catalog(config: Option<&Path>) -> Result<LoadedCatalog> {
    let options = NormalizeOptions::new().with_keep_disabled(true);
    let loaded = CatalogLoader::new()
        .with_paths(config)
        .from_env()
        .with_bundled(BUNDLED_DOCUMENT)
        .with_options(options)
        .load()
        .context("Failed to load shortcut catalog")?;

    let malformed = loaded.report.malformed().count();
    if malformed > 0 {
        tracing::warn!(
            source = %loaded.source,
            malformed,
            "Some shortcut entries were skipped; run `keysheet check` for details"
        );
    }
    tracing::debug!(source = %loaded.source, programs = loaded.report.catalog.len(), "Catalog ready");
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keysheet_catalog::normalize_str;

    #[test]
    fn test_bundled_document_is_valid() {
        let catalog = normalize_str(BUNDLED_DOCUMENT).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find_shortcut("Quick open").is_some());
    }
}
