use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Per-axis gap utilities: `gap-col` and `gap-row`.
pub fn gap(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "gap");
    let options = MatchOptions::default();
    let mut set = RuleSet::new();

    set.match_values("gap-col", &values, &options, |value| vec![decl("column-gap", value)]);
    set.match_values("gap-row", &values, &options, |value| vec![decl("row-gap", value)]);

    Ok(set)
}
