use anyhow::Error;
use rules::{Entry, MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Horizontally centered column, parameterized over max inline sizes. The
/// `-intrinsic` form also centers the children themselves.
pub fn el_center(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "max-inline-size");
    let auto = theme.require("margin.auto").to_owned();
    let mut set = RuleSet::new();

    let base = move |value: &str| -> Vec<Entry> {
        vec![
            decl("box-sizing", "content-box"),
            decl("margin-inline", auto.clone()),
            decl("max-inline-size", value),
        ]
    };

    {
        let base = base.clone();
        set.match_values("el-center", &values, &MatchOptions::default(), move |value| base(value));
    }
    set.match_values("el-center-intrinsic", &values, &MatchOptions::default(), move |value| {
        let mut entries = base(value);
        entries.push(decl("align-items", "center"));
        entries.push(decl("display", "flex"));
        entries.push(decl("flex-direction", "column"));
        entries
    });

    Ok(set)
}
