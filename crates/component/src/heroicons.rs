use anyhow::{Context as _, Error};
use log::debug;
use rules::{RuleSet, decl};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use theme::Theme;

/// Icon variants: name suffix and the subdirectory holding that set.
/// A logical name is the file stem plus the suffix, so `16/solid/home.svg`
/// becomes `home-micro`.
const VARIANTS: &[(&str, &str)] = &[
    ("", "24/outline"),
    ("-micro", "16/solid"),
    ("-mini", "20/solid"),
    ("-solid", "24/solid"),
];

/// Build the heroicon generator for an icon directory laid out in the
/// variant subdirectories of [`VARIANTS`].
///
/// Each icon becomes a `hero-{name}` class embedding the file's contents
/// (line breaks stripped) as a utf8 SVG data URI behind a mask, sized by the
/// suffix: `-micro` gets `spacing.4`, `-mini` gets `spacing.5` and anything
/// else `spacing.6`, tested in that order. A missing subdirectory or an
/// unreadable file fails the build; the asset set is version-controlled, so
/// there is nothing sensible to recover to.
pub fn heroicons(root: impl Into<PathBuf>) -> impl Fn(&Theme) -> Result<RuleSet, Error> + 'static {
    let root = root.into();
    move |theme| {
        let mut icons: BTreeMap<String, PathBuf> = BTreeMap::new();
        for (suffix, subdir) in VARIANTS {
            let dir = root.join(subdir);
            for path in list_files(&dir)? {
                let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                icons.insert(format!("{stem}{suffix}"), path);
            }
        }
        debug!(target: "component", "loaded {} heroicon(s) from {}", icons.len(), root.display());

        let mut set = RuleSet::new();
        for (name, path) in &icons {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read icon {}", path.display()))?
                .replace(['\r', '\n'], "");
            let size = icon_size(theme, name).to_owned();
            set.push_static(
                format!("hero-{name}"),
                vec![
                    decl(format!("--hero-{name}"), format!("url('data:image/svg+xml;utf8,{content}')")),
                    decl("background-color", "currentColor"),
                    decl("block-size", size.clone()),
                    decl("display", "inline-block"),
                    decl("inline-size", size),
                    decl("mask-image", format!("var(--hero-{name})")),
                    decl("mask-repeat", "no-repeat"),
                    decl("vertical-align", "middle"),
                ],
            );
        }
        Ok(set)
    }
}

/// Size by suffix, `-micro` before `-mini` before the default.
fn icon_size<'t>(theme: &'t Theme, name: &str) -> &'t str {
    if name.ends_with("-micro") {
        theme.require("spacing.4")
    } else if name.ends_with("-mini") {
        theme.require("spacing.5")
    } else {
        theme.require("spacing.6")
    }
}

/// Sorted regular files of a directory. Sorting keeps the generated rule
/// set independent of the platform's directory order.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read icon directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if entry.file_type().map(|kind| kind.is_file()).unwrap_or(false) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::Entry;
    use theme::Scale;

    fn spacing_theme() -> Theme {
        let mut theme = Theme::empty();
        theme.set_scale(
            "spacing",
            Scale::new().with("4", "1rem").with("5", "1.25rem").with("6", "1.5rem"),
        );
        theme
    }

    fn icon_root() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        for (_, subdir) in VARIANTS {
            fs::create_dir_all(root.path().join(subdir)).unwrap();
        }
        root
    }

    fn first_value<'r>(set: &'r RuleSet, class: &str, property: &str) -> &'r str {
        let rule = set.rules().iter().find(|rule| rule.class == class).unwrap();
        rule.entries
            .iter()
            .find_map(|entry| match entry {
                Entry::Declaration(declaration) if declaration.property == property => {
                    Some(declaration.value.as_str())
                }
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn suffix_selects_name_and_size() {
        let root = icon_root();
        fs::write(root.path().join("16/solid/home.svg"), "<svg>\n<path/>\n</svg>\n").unwrap();
        fs::write(root.path().join("24/outline/home.svg"), "<svg/>").unwrap();

        let set = heroicons(root.path())(&spacing_theme()).unwrap();
        assert_eq!(first_value(&set, "hero-home-micro", "block-size"), "1rem");
        assert_eq!(first_value(&set, "hero-home", "block-size"), "1.5rem");
    }

    #[test]
    fn content_is_inlined_without_line_breaks() {
        let root = icon_root();
        fs::write(root.path().join("20/solid/bell.svg"), "<svg>\r\n<path/>\r\n</svg>").unwrap();

        let set = heroicons(root.path())(&spacing_theme()).unwrap();
        assert_eq!(
            first_value(&set, "hero-bell-mini", "--hero-bell-mini"),
            "url('data:image/svg+xml;utf8,<svg><path/></svg>')"
        );
        assert_eq!(
            first_value(&set, "hero-bell-mini", "mask-image"),
            "var(--hero-bell-mini)"
        );
    }

    #[test]
    fn missing_variant_directory_fails_the_build() {
        let root = tempfile::tempdir().unwrap();
        // Only one of the four variant directories exists.
        fs::create_dir_all(root.path().join("24/outline")).unwrap();
        assert!(heroicons(root.path())(&spacing_theme()).is_err());
    }
}
