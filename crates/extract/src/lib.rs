//! Build artifacts for downstream allow-listing.
//!
//! Templates reference generated classes by name; the template pipeline
//! needs the realized name sets as flat files. Two are written: every class
//! name (with `class/modifier` lines for named modifiers) and every declared
//! variant name, one per line. Re-running against an unchanged configuration
//! rewrites byte-identical files.

use anyhow::{Context as _, Error};
use log::info;
use rules::Resolved;
use std::fs;
use std::path::Path;

pub const CLASS_FILE: &str = "classes.txt";
pub const VARIANT_FILE: &str = "variants.txt";

/// Write `classes.txt` and `variants.txt` under `build_path`, creating the
/// directory if needed and overwriting previous runs.
///
/// # Errors
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn write_artifacts(resolved: &Resolved, build_path: &Path) -> Result<(), Error> {
    fs::create_dir_all(build_path)
        .with_context(|| format!("failed to create build directory {}", build_path.display()))?;

    let classes = resolved.class_list();
    let class_path = build_path.join(CLASS_FILE);
    fs::write(&class_path, classes.join("\n"))
        .with_context(|| format!("failed to write {}", class_path.display()))?;

    let variants = resolved.variant_list();
    let variant_path = build_path.join(VARIANT_FILE);
    fs::write(&variant_path, variants.join("\n"))
        .with_context(|| format!("failed to write {}", variant_path.display()))?;

    info!(
        target: "extract",
        "wrote {} class(es) and {} variant(s) to {}",
        classes.len(),
        variants.len(),
        build_path.display()
    );
    Ok(())
}
