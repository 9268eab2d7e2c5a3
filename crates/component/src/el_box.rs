use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A padded, bordered box, parameterized over the padding scale.
pub fn el_box(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "padding");
    let border = theme.require("border-width.DEFAULT").to_owned();
    let mut set = RuleSet::new();
    set.match_values("el-box", &values, &MatchOptions::default(), |value| {
        vec![decl("border-width", border.clone()), decl("padding", value)]
    });
    Ok(set)
}
