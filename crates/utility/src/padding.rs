use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Logical padding utilities: `plb`/`pli` axis pairs and the four sides.
pub fn padding(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "padding");
    let options = MatchOptions::default();
    let mut set = RuleSet::new();

    set.match_values("plb", &values, &options, |value| vec![decl("padding-block", value)]);
    set.match_values("pli", &values, &options, |value| vec![decl("padding-inline", value)]);

    set.match_values("pbe", &values, &options, |value| vec![decl("padding-block-end", value)]);
    set.match_values("pbs", &values, &options, |value| vec![decl("padding-block-start", value)]);
    set.match_values("pie", &values, &options, |value| vec![decl("padding-inline-end", value)]);
    set.match_values("pis", &values, &options, |value| vec![decl("padding-inline-start", value)]);

    Ok(set)
}
