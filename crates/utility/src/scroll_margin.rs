use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Logical scroll-margin utilities, negative-capable like plain margins.
pub fn scroll_margin(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "scroll-margin");
    let options = MatchOptions { negative: true, ..MatchOptions::default() };
    let mut set = RuleSet::new();

    set.match_values("scroll-mlb", &values, &options, |value| {
        vec![decl("scroll-margin-block", value)]
    });
    set.match_values("scroll-mli", &values, &options, |value| {
        vec![decl("scroll-margin-inline", value)]
    });

    set.match_values("scroll-mbe", &values, &options, |value| {
        vec![decl("scroll-margin-block-end", value)]
    });
    set.match_values("scroll-mbs", &values, &options, |value| {
        vec![decl("scroll-margin-block-start", value)]
    });
    set.match_values("scroll-mie", &values, &options, |value| {
        vec![decl("scroll-margin-inline-end", value)]
    });
    set.match_values("scroll-mis", &values, &options, |value| {
        vec![decl("scroll-margin-inline-start", value)]
    });

    Ok(set)
}
