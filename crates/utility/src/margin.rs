use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Logical margin utilities: axis pairs (`mlb`, `mli`) and the four sides
/// (`mbe`, `mbs`, `mie`, `mis`), with negative twins.
pub fn margin(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "margin");
    let options = MatchOptions { negative: true, ..MatchOptions::default() };
    let mut set = RuleSet::new();

    set.match_values("mlb", &values, &options, |value| vec![decl("margin-block", value)]);
    set.match_values("mli", &values, &options, |value| vec![decl("margin-inline", value)]);

    set.match_values("mbe", &values, &options, |value| vec![decl("margin-block-end", value)]);
    set.match_values("mbs", &values, &options, |value| vec![decl("margin-block-start", value)]);
    set.match_values("mie", &values, &options, |value| vec![decl("margin-inline-end", value)]);
    set.match_values("mis", &values, &options, |value| vec![decl("margin-inline-start", value)]);

    Ok(set)
}
