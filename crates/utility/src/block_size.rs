use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Block-axis sizing utilities: `bs`, `max-bs`, `min-bs`, each over its own
/// sizing scale.
pub fn block_size(theme: &Theme) -> Result<RuleSet, Error> {
    let options = MatchOptions::default();
    let mut set = RuleSet::new();

    let sizes = ValueDomain::from_scale(theme, "block-size");
    set.match_values("bs", &sizes, &options, |value| vec![decl("block-size", value)]);

    let maxima = ValueDomain::from_scale(theme, "max-block-size");
    set.match_values("max-bs", &maxima, &options, |value| vec![decl("max-block-size", value)]);

    let minima = ValueDomain::from_scale(theme, "min-block-size");
    set.match_values("min-bs", &minima, &options, |value| vec![decl("min-block-size", value)]);

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::Scale;

    #[test]
    fn one_rule_per_scale_entry_with_the_resolved_value() {
        let mut theme = Theme::empty();
        theme.set_scale("block-size", Scale::new().with("4", "1rem").with("full", "100%"));
        let set = block_size(&theme).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.rules()[0].class, "bs-4");
        assert_eq!(set.rules()[0].entries, vec![decl("block-size", "1rem")]);
        assert_eq!(set.rules()[1].class, "bs-full");
        assert_eq!(set.rules()[1].entries, vec![decl("block-size", "100%")]);
    }
}
