use anyhow::Error;
use rules::{Entry, RuleSet, decl};
use theme::Theme;

/// An element centered over its positioning context; the `-fixed` form pins
/// it to the viewport instead.
pub fn el_imposter(theme: &Theme) -> Result<RuleSet, Error> {
    let half = theme.require("inset.1/2").to_owned();
    let base = |position: &str| -> Vec<Entry> {
        vec![
            decl("inset-block-start", half.clone()),
            decl("inset-inline-start", half.clone()),
            decl("position", position),
            decl("transform", "translate(-50%, -50%)"),
        ]
    };

    let mut set = RuleSet::new();
    set.push_static("el-imposter", base("absolute"));
    set.push_static("el-imposter-fixed", base("fixed"));
    Ok(set)
}
