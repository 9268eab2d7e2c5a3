use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Logical scroll-padding utilities.
pub fn scroll_padding(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "scroll-padding");
    let options = MatchOptions::default();
    let mut set = RuleSet::new();

    set.match_values("scroll-plb", &values, &options, |value| {
        vec![decl("scroll-padding-block", value)]
    });
    set.match_values("scroll-pli", &values, &options, |value| {
        vec![decl("scroll-padding-inline", value)]
    });

    set.match_values("scroll-pbe", &values, &options, |value| {
        vec![decl("scroll-padding-block-end", value)]
    });
    set.match_values("scroll-pbs", &values, &options, |value| {
        vec![decl("scroll-padding-block-start", value)]
    });
    set.match_values("scroll-pie", &values, &options, |value| {
        vec![decl("scroll-padding-inline-end", value)]
    });
    set.match_values("scroll-pis", &values, &options, |value| {
        vec![decl("scroll-padding-inline-start", value)]
    });

    Ok(set)
}
