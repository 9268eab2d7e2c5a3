use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A self-packing grid: columns as wide as the given inline size, as many
/// as fit, never wider than the container.
pub fn el_grid(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "inline-size");
    let full = theme.require("inline-size.full").to_owned();

    let mut set = RuleSet::new();
    set.match_values("el-grid", &values, &MatchOptions::default(), move |value| {
        vec![
            decl("display", "grid"),
            decl(
                "grid-template-columns",
                format!("repeat(auto-fit, minmax(min({value}, {full}), 1fr))"),
            ),
        ]
    });
    Ok(set)
}
