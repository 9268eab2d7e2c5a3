use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, ValueType, decl};
use theme::Theme;

/// Logical border width utilities. `border-lb`/`border-li` set both sides of
/// an axis; the four side prefixes set one side. The side prefixes are
/// shared with [`crate::border_color`]; the two units target disjoint
/// properties, so a width rule and a color rule for the same realized class
/// merge instead of conflicting.
pub fn border_width(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "border-width");
    let options = MatchOptions { types: vec![ValueType::LineWidth], ..MatchOptions::default() };
    let mut set = RuleSet::new();

    set.match_values("border-lb", &values, &options, |value| {
        vec![decl("border-block-end-width", value), decl("border-block-start-width", value)]
    });
    set.match_values("border-li", &values, &options, |value| {
        vec![decl("border-inline-end-width", value), decl("border-inline-start-width", value)]
    });

    set.match_values("border-be", &values, &options, |value| {
        vec![decl("border-block-end-width", value)]
    });
    set.match_values("border-bs", &values, &options, |value| {
        vec![decl("border-block-start-width", value)]
    });
    set.match_values("border-ie", &values, &options, |value| {
        vec![decl("border-inline-end-width", value)]
    });
    set.match_values("border-is", &values, &options, |value| {
        vec![decl("border-inline-start-width", value)]
    });

    Ok(set)
}
