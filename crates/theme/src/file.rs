//! Optional theme files. A theme file is a JSON object of scales; entries
//! overlay the built-in defaults key by key. Nested objects (color palettes)
//! are flattened with `-` joins, `DEFAULT` collapsing onto its parent key,
//! and arrays (font stacks) join into one comma-separated value.

use crate::{Theme, default_theme};
use anyhow::{Context as _, Error, bail};
use log::info;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load a theme file and overlay it on the default theme.
///
/// # Errors
/// Returns an error if the file cannot be read, is not a JSON object of
/// objects, or contains an entry that is neither scalar, array nor object.
pub fn load(path: &Path) -> Result<Theme, Error> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    let scales: BTreeMap<String, Value> = serde_json::from_str(&text)
        .with_context(|| format!("theme file {} is not a JSON object", path.display()))?;

    let mut theme = default_theme();
    for (name, value) in &scales {
        let Value::Object(entries) = value else {
            bail!("theme scale {name:?} must be a JSON object of tokens");
        };
        let mut flat = Vec::new();
        for (key, entry) in entries {
            flatten_into(key, entry, &mut flat)
                .with_context(|| format!("in theme scale {name:?}"))?;
        }
        for (key, text) in &flat {
            theme.set_token(&format!("{name}.{key}"), text)?;
        }
        info!(target: "theme", "overlaid {} token(s) onto scale {name:?}", flat.len());
    }
    Ok(theme)
}

/// Flatten one scale entry. `{"red": {"500": "#ef4444", "DEFAULT": "#f00"}}`
/// yields `red-500` and `red`.
fn flatten_into(key: &str, value: &Value, out: &mut Vec<(String, String)>) -> Result<(), Error> {
    match value {
        Value::String(text) => out.push((key.to_owned(), text.clone())),
        Value::Number(number) => out.push((key.to_owned(), number.to_string())),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(text) => parts.push(text.clone()),
                    Value::Number(number) => parts.push(number.to_string()),
                    other => bail!("token {key:?} has a non-scalar array element: {other}"),
                }
            }
            out.push((key.to_owned(), parts.join(", ")));
        }
        Value::Object(nested) => {
            for (suffix, entry) in nested {
                let joined = if suffix == "DEFAULT" {
                    key.to_owned()
                } else {
                    format!("{key}-{suffix}")
                };
                flatten_into(&joined, entry, out)?;
            }
        }
        other => bail!("token {key:?} has an unsupported value: {other}"),
    }
    Ok(())
}
