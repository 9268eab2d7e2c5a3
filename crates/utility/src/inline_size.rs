use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Inline-axis sizing utilities: `is`, `max-is`, `min-is`.
pub fn inline_size(theme: &Theme) -> Result<RuleSet, Error> {
    let options = MatchOptions::default();
    let mut set = RuleSet::new();

    let sizes = ValueDomain::from_scale(theme, "inline-size");
    set.match_values("is", &sizes, &options, |value| vec![decl("inline-size", value)]);

    let maxima = ValueDomain::from_scale(theme, "max-inline-size");
    set.match_values("max-is", &maxima, &options, |value| vec![decl("max-inline-size", value)]);

    let minima = ValueDomain::from_scale(theme, "min-inline-size");
    set.match_values("min-is", &minima, &options, |value| vec![decl("min-inline-size", value)]);

    Ok(set)
}
