//! TOML navigation manifest loading
//!
//! A manifest is the authored form of the navigation tree:
//!
//! ```toml
//! [[section]]
//! title = "Getting Started"
//! items = [
//!     { title = "Overview", path = "/docs" },
//!     { title = "Quickstart", path = "/docs/quickstart" },
//! ]
//! ```
//!
//! Parsing goes through [`TreeBuilder`], so manifest trees satisfy the same
//! invariants as the compiled-in one.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{NavTree, TreeBuilder};
use crate::infrastructure::error::{InfraError, InfraResult};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    section: Vec<ManifestSection>,
}

#[derive(Debug, Deserialize)]
struct ManifestSection {
    title: String,
    #[serde(default)]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    title: String,
    path: String,
}

/// Parse manifest content into a validated tree.
pub fn parse_manifest(content: &str) -> InfraResult<NavTree> {
    let manifest: Manifest = toml::from_str(content).map_err(|e| InfraError::Manifest {
        message: e.to_string(),
    })?;

    let mut builder = TreeBuilder::new();
    for section in manifest.section {
        builder = builder.section(section.title);
        for item in section.items {
            builder = builder.item(item.title, item.path);
        }
    }
    let tree = builder.build().map_err(crate::application::ApplicationError::from)?;
    debug!(
        "loaded manifest tree: {} sections, {} pages",
        tree.section_count(),
        tree.page_count()
    );
    Ok(tree)
}

/// Load and parse a manifest file.
pub fn load_manifest(path: &Path) -> InfraResult<NavTree> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| InfraError::io(format!("read manifest {}", path.display()), e))?;
    parse_manifest(&content)
}
