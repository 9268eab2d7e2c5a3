//! Design-token tables for the rule generators.
//!
//! A [`Theme`] is a set of named [`Scale`]s (spacing, color palette, sizing
//! keywords, ...). Generators look values up either by whole scale (to map a
//! class prefix over every entry) or by dotted path (`"padding.4"`) for a
//! single token. Lookups are read-only at generation time.

mod default;
mod file;
mod scale;

use anyhow::{Error, bail};
use log::warn;
use std::collections::BTreeMap;

pub use crate::default::default_theme;
pub use crate::file::load;
pub use crate::scale::{Scale, TokenValue};

/// Named design-token scales, queried by dotted path.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    scales: BTreeMap<String, Scale>,
}

impl Theme {
    /// A theme with no scales at all. Mostly useful in tests; real callers
    /// start from [`default_theme`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a whole scale by name, e.g. `"padding"`.
    pub fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }

    /// Replace (or install) a named scale.
    pub fn set_scale(&mut self, name: &str, scale: Scale) {
        self.scales.insert(name.to_owned(), scale);
    }

    /// Resolve a dotted path like `"padding.4"` or `"border-width.DEFAULT"`.
    ///
    /// Only the first dot separates the scale name from the key, so keys may
    /// themselves contain dots (`"spacing.0.5"`). Nested palettes are stored
    /// pre-flattened, so a palette token reads as `"border-color.red-500"`.
    pub fn token(&self, path: &str) -> Option<&str> {
        let (scale, key) = path.split_once('.')?;
        self.scales.get(scale)?.get(key).map(TokenValue::as_str)
    }

    /// Like [`Theme::token`], but a missing path resolves to the empty string
    /// with a warning instead of an error. Generators use this for constants
    /// they substitute into rule bodies; a bad path shows up as an empty slot
    /// in the generated rule rather than aborting the build.
    pub fn require(&self, path: &str) -> &str {
        self.token(path).unwrap_or_else(|| {
            warn!(target: "theme", "unknown theme path {path:?}, substituting an empty value");
            ""
        })
    }

    /// Set a single token at a dotted path, creating the scale if needed.
    /// This is how composed-configuration theme extensions are applied.
    ///
    /// # Errors
    /// Returns an error if the path has no `scale.key` shape.
    pub fn set_token(&mut self, path: &str, text: &str) -> Result<(), Error> {
        let Some((scale, key)) = path.split_once('.') else {
            bail!("theme extension path {path:?} is missing a `scale.key` separator");
        };
        self.scales.entry(scale.to_owned()).or_default().push(key, text);
        Ok(())
    }

    /// Names of all installed scales, in sorted order.
    pub fn scale_names(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }
}
