use crate::declaration::Entry;
use crate::rule::RuleSet;
use anyhow::{Context as _, Error, bail};
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Write as _;
use theme::Theme;

/// Variant names the configuration declares by default: responsive
/// breakpoints, state selectors, directionality and print.
pub const DEFAULT_VARIANTS: &[&str] = &[
    "sm",
    "md",
    "lg",
    "xl",
    "2xl",
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "visited",
    "disabled",
    "first",
    "last",
    "odd",
    "even",
    "group-hover",
    "group-focus",
    "motion-safe",
    "motion-reduce",
    "dark",
    "ltr",
    "rtl",
    "print",
];

type UnitFn = Box<dyn Fn(&Theme) -> Result<RuleSet, Error>>;

/// The composed configuration: an ordered sequence of named generator units,
/// global theme-extension entries, and the declared variant names.
///
/// Built once via the builder methods, consumed via [`Config::resolve`]; no
/// runtime mutation after assembly.
#[derive(Default)]
pub struct Config {
    units: Vec<(String, UnitFn)>,
    extensions: Vec<(String, String)>,
    variants: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator unit. Registration order is composition order:
    /// when two units claim the same class, their entries merge in this
    /// order into one bucket.
    pub fn unit<F>(mut self, name: &str, generator: F) -> Self
    where
        F: Fn(&Theme) -> Result<RuleSet, Error> + 'static,
    {
        self.units.push((name.to_owned(), Box::new(generator)));
        self
    }

    /// Add a global theme extension (`"font-family.sans"` → stack). Applied
    /// to a working copy of the theme before any unit runs.
    pub fn extend_theme(mut self, path: &str, value: &str) -> Self {
        self.extensions.push((path.to_owned(), value.to_owned()));
        self
    }

    /// Declare the variant names exposed to extraction.
    pub fn variants(mut self, names: &[&str]) -> Self {
        self.variants = names.iter().map(|&name| name.to_owned()).collect();
        self
    }

    /// Run every unit against the (extended) theme and compose the results.
    ///
    /// # Errors
    /// Returns an error if a unit fails, produces a duplicate class within
    /// its own rule set, or a theme extension path is malformed. Distinct
    /// units may share a class; those target disjoint properties and merge.
    pub fn resolve(&self, theme: &Theme) -> Result<Resolved, Error> {
        let mut theme = theme.clone();
        for (path, value) in &self.extensions {
            theme.set_token(path, value)?;
        }

        let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
        for (name, generator) in &self.units {
            let set = generator(&theme).with_context(|| format!("generator unit {name:?} failed"))?;
            let produced = set.len();
            let mut seen: HashSet<String> = HashSet::with_capacity(produced);
            for rule in set.into_rules() {
                if !seen.insert(rule.class.clone()) {
                    bail!("generator unit {name:?} produced duplicate class {:?}", rule.class);
                }
                let bucket = buckets.entry(rule.class).or_default();
                bucket.entries.extend(rule.entries);
                bucket.modifiers.extend(rule.modifiers);
            }
            debug!(target: "rules", "unit {name} contributed {produced} rule(s)");
        }

        Ok(Resolved { buckets, variants: self.variants.clone() })
    }
}

/// The merged rule body for one realized class.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    pub entries: Vec<Entry>,
    pub modifiers: BTreeSet<String>,
}

/// The fully composed rule set, keyed by class name.
#[derive(Debug, Clone, Default)]
pub struct Resolved {
    buckets: BTreeMap<String, Bucket>,
    variants: Vec<String>,
}

impl Resolved {
    pub fn bucket(&self, class: &str) -> Option<&Bucket> {
        self.buckets.get(class)
    }

    pub fn class_count(&self) -> usize {
        self.buckets.len()
    }

    /// Every realized class name, sorted, with `class/modifier` lines
    /// following their base class.
    pub fn class_list(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.buckets.len());
        for (class, bucket) in &self.buckets {
            names.push(class.clone());
            for modifier in &bucket.modifiers {
                names.push(format!("{class}/{modifier}"));
            }
        }
        names
    }

    pub fn variant_list(&self) -> &[String] {
        &self.variants
    }

    /// Render the composed set as a flat stylesheet. This serializes exactly
    /// what the units produced; variant expansion is the compilation
    /// engine's job, not ours.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (class, bucket) in &self.buckets {
            let selector = format!(".{}", escape_class(class));
            let mut top = Vec::new();
            for entry in &bucket.entries {
                match entry {
                    Entry::Declaration(declaration) => top.push(declaration),
                    Entry::Block { .. } => {}
                }
            }
            if !top.is_empty() {
                let _ = writeln!(out, "{selector} {{");
                for declaration in top {
                    let _ = writeln!(out, "  {}: {};", declaration.property, declaration.value);
                }
                let _ = writeln!(out, "}}");
            }
            for entry in &bucket.entries {
                if let Entry::Block { selector: nested, declarations } = entry {
                    let _ = writeln!(out, "{} {{", nested.replace('&', &selector));
                    for declaration in declarations {
                        let _ = writeln!(out, "  {}: {};", declaration.property, declaration.value);
                    }
                    let _ = writeln!(out, "}}");
                }
            }
        }
        out
    }
}

/// Escape a generated class name for use in a selector (`inset-1/2` →
/// `inset-1\/2`, `bs-0.5` → `bs-0\.5`).
fn escape_class(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len());
    for c in class.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }
    escaped
}
