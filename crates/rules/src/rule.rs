use crate::declaration::Entry;
use crate::value::{ValueType, negate};
use log::warn;
use theme::{Theme, TokenValue};

/// One generated class and its rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub class: String,
    pub entries: Vec<Entry>,
    /// Named modifier keys realized as `class/modifier` during extraction.
    pub modifiers: Vec<String>,
}

/// The enumerated set of theme values one parameterized generator maps over.
#[derive(Debug, Clone, Default)]
pub struct ValueDomain {
    entries: Vec<(String, TokenValue)>,
}

impl ValueDomain {
    /// Snapshot a whole theme scale. A missing scale yields an empty domain
    /// (the generator then produces nothing), with a warning.
    pub fn from_scale(theme: &Theme, name: &str) -> Self {
        theme.scale(name).map_or_else(
            || {
                warn!(target: "rules", "theme scale {name:?} is missing, value domain is empty");
                Self::default()
            },
            |scale| Self {
                entries: scale
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.clone()))
                    .collect(),
            },
        )
    }

    /// Snapshot a scale minus its `DEFAULT` key (color palettes drop the
    /// bare default before mapping).
    pub fn from_scale_without_default(theme: &Theme, name: &str) -> Self {
        let mut domain = Self::from_scale(theme, name);
        domain.entries.retain(|(key, _)| key != "DEFAULT");
        domain
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys only, e.g. to hand a scale's keys to [`MatchOptions::modifiers`].
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }
}

/// Options for mapping a class prefix over a [`ValueDomain`].
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    /// Also emit `-prefix-key` twins with sign-flipped values for the
    /// negatable domain entries.
    pub negative: bool,
    /// Accepted-value filter; empty means accept everything.
    pub types: Vec<ValueType>,
    /// Modifier keys attached to every produced rule.
    pub modifiers: Vec<String>,
}

impl MatchOptions {
    fn accepts(&self, value: &TokenValue) -> bool {
        self.types.is_empty() || self.types.iter().any(|kind| kind.accepts(value))
    }
}

/// The ordered set of rules one generator unit produces.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one fixed class with the given body.
    pub fn push_static(&mut self, class: impl Into<String>, entries: Vec<Entry>) {
        self.rules.push(Rule { class: class.into(), entries, modifiers: Vec::new() });
    }

    /// Map `prefix` over a value domain: one rule per accepted entry, class
    /// `prefix-key` (bare `prefix` for the `DEFAULT` key), body built from
    /// the resolved value text.
    pub fn match_values<F>(
        &mut self,
        prefix: &str,
        domain: &ValueDomain,
        options: &MatchOptions,
        body: F,
    ) where
        F: Fn(&str) -> Vec<Entry>,
    {
        for (key, value) in domain.iter() {
            if !options.accepts(value) {
                continue;
            }
            self.rules.push(Rule {
                class: class_name(prefix, key, false),
                entries: body(value.as_str()),
                modifiers: options.modifiers.clone(),
            });
            if options.negative {
                if let Some(negated) = negate(value) {
                    self.rules.push(Rule {
                        class: class_name(prefix, key, true),
                        entries: body(&negated),
                        modifiers: options.modifiers.clone(),
                    });
                }
            }
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn class_name(prefix: &str, key: &str, negated: bool) -> String {
    let sign = if negated { "-" } else { "" };
    if key == "DEFAULT" {
        format!("{sign}{prefix}")
    } else {
        format!("{sign}{prefix}-{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl;
    use theme::Scale;

    fn block_size_theme() -> Theme {
        let mut theme = Theme::empty();
        theme.set_scale("block-size", Scale::new().with("4", "1rem").with("full", "100%"));
        theme
    }

    #[test]
    fn one_rule_per_domain_value() {
        let theme = block_size_theme();
        let domain = ValueDomain::from_scale(&theme, "block-size");
        let mut set = RuleSet::new();
        set.match_values("bs", &domain, &MatchOptions::default(), |value| {
            vec![decl("block-size", value)]
        });

        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[0].class, "bs-4");
        assert_eq!(set.rules()[0].entries, vec![decl("block-size", "1rem")]);
        assert_eq!(set.rules()[1].class, "bs-full");
        assert_eq!(set.rules()[1].entries, vec![decl("block-size", "100%")]);
    }

    #[test]
    fn negative_twins_skip_non_negatable_values() {
        let mut theme = Theme::empty();
        theme.set_scale(
            "margin",
            Scale::new().with("0", "0px").with("4", "1rem").with("auto", "auto"),
        );
        let domain = ValueDomain::from_scale(&theme, "margin");
        let options = MatchOptions { negative: true, ..MatchOptions::default() };
        let mut set = RuleSet::new();
        set.match_values("mlb", &domain, &options, |value| vec![decl("margin-block", value)]);

        let classes: Vec<&str> = set.rules().iter().map(|rule| rule.class.as_str()).collect();
        assert_eq!(classes, ["mlb-0", "mlb-4", "-mlb-4", "mlb-auto"]);
        assert_eq!(set.rules()[2].entries, vec![decl("margin-block", "-1rem")]);
    }

    #[test]
    fn default_key_maps_to_bare_prefix() {
        let mut theme = Theme::empty();
        theme.set_scale("border-width", Scale::new().with("DEFAULT", "1px").with("2", "2px"));
        let domain = ValueDomain::from_scale(&theme, "border-width");
        let mut set = RuleSet::new();
        set.match_values("border-bs", &domain, &MatchOptions::default(), |value| {
            vec![decl("border-block-start-width", value)]
        });
        assert_eq!(set.rules()[0].class, "border-bs");
        assert_eq!(set.rules()[1].class, "border-bs-2");
    }

    #[test]
    fn type_filter_drops_rejected_entries() {
        let mut theme = Theme::empty();
        theme.set_scale(
            "border-color",
            Scale::new().with("red-500", "#ef4444").with("oops", "1rem"),
        );
        let domain = ValueDomain::from_scale(&theme, "border-color");
        let options = MatchOptions { types: vec![ValueType::Color], ..MatchOptions::default() };
        let mut set = RuleSet::new();
        set.match_values("border-be", &domain, &options, |value| {
            vec![decl("border-block-end-color", value)]
        });
        assert_eq!(set.len(), 1);
        assert_eq!(set.rules()[0].class, "border-be-red-500");
    }

    #[test]
    fn missing_scale_produces_an_empty_domain() {
        let domain = ValueDomain::from_scale(&Theme::empty(), "nope");
        assert!(domain.is_empty());
    }
}
