//! Taxonomy configuration loading.
//!
//! Two file shapes are accepted, both keeping declaration order:
//!
//! - TOML, an array of tables:
//!
//!   ```toml
//!   [[category]]
//!   name = "Neoplasms"
//!   range = [140, 239]
//!   ```
//!
//! - JSON (legacy), an object from category name to `[start, end]`:
//!
//!   ```json
//!   { "Neoplasms": [140, 239] }
//!   ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use pfe_model::{DiagnosisCategory, Taxonomy};

use crate::embedded::{EMBEDDED_ORIGIN, ICD9_CATEGORIES};
use crate::error::{Result, StandardsError};

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(rename = "category", default)]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    range: [i64; 2],
}

/// Load the embedded ICD-9 chapter taxonomy.
pub fn load_default_taxonomy() -> Result<Taxonomy> {
    parse_taxonomy_toml(ICD9_CATEGORIES, Path::new(EMBEDDED_ORIGIN))
}

/// Load a taxonomy file; `.json` files use the legacy object shape, anything
/// else is read as TOML.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let is_json = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let taxonomy = if is_json {
        parse_taxonomy_json(&text, path)?
    } else {
        parse_taxonomy_toml(&text, path)?
    };
    debug!(
        path = %path.display(),
        category_count = taxonomy.len(),
        "loaded taxonomy"
    );
    Ok(taxonomy)
}

pub fn parse_taxonomy_toml(text: &str, origin: &Path) -> Result<Taxonomy> {
    let file: TaxonomyFile = toml::from_str(text).map_err(|source| StandardsError::Toml {
        path: origin.to_path_buf(),
        source,
    })?;
    build_taxonomy(
        file.categories
            .into_iter()
            .map(|entry| (entry.name, entry.range)),
        origin,
    )
}

pub fn parse_taxonomy_json(text: &str, origin: &Path) -> Result<Taxonomy> {
    let json_error = |source| StandardsError::Json {
        path: origin.to_path_buf(),
        source,
    };
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(text).map_err(json_error)?;
    let mut entries = Vec::with_capacity(object.len());
    for (name, value) in object {
        let range: [i64; 2] = serde_json::from_value(value).map_err(json_error)?;
        entries.push((name, range));
    }
    build_taxonomy(entries, origin)
}

fn build_taxonomy(
    entries: impl IntoIterator<Item = (String, [i64; 2])>,
    origin: &Path,
) -> Result<Taxonomy> {
    let categories = entries
        .into_iter()
        .map(|(name, [start, end])| DiagnosisCategory::new(name, start, end))
        .collect::<pfe_model::Result<Vec<_>>>()
        .map_err(|e| StandardsError::invalid(origin, e))?;
    Taxonomy::new(categories).map_err(|e| StandardsError::invalid(origin, e))
}
