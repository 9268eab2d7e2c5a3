use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A wrapping row of items with a gap, parameterized over the gap scale.
pub fn el_cluster(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "gap");
    let mut set = RuleSet::new();
    set.match_values("el-cluster", &values, &MatchOptions::default(), |value| {
        vec![
            decl("align-items", "center"),
            decl("display", "flex"),
            decl("flex-wrap", "wrap"),
            decl("gap", value),
            decl("justify-content", "flex-start"),
        ]
    });
    Ok(set)
}
