use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Logical inset utilities: axis pairs plus the four flow-relative sides
/// (`block-start`, `inline-end`, ...), with negative twins.
pub fn inset(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "inset");
    let options = MatchOptions { negative: true, ..MatchOptions::default() };
    let mut set = RuleSet::new();

    set.match_values("inset-block", &values, &options, |value| vec![decl("inset-block", value)]);
    set.match_values("inset-inline", &values, &options, |value| {
        vec![decl("inset-inline", value)]
    });

    set.match_values("block-end", &values, &options, |value| vec![decl("inset-block-end", value)]);
    set.match_values("block-start", &values, &options, |value| {
        vec![decl("inset-block-start", value)]
    });
    set.match_values("inline-end", &values, &options, |value| {
        vec![decl("inset-inline-end", value)]
    });
    set.match_values("inline-start", &values, &options, |value| {
        vec![decl("inset-inline-start", value)]
    });

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::Scale;

    #[test]
    fn fraction_keys_negate_as_percentages() {
        let mut theme = Theme::empty();
        theme.set_scale("inset", Scale::new().with("1/2", "50%"));
        let set = inset(&theme).unwrap();
        let negated = set
            .rules()
            .iter()
            .find(|rule| rule.class == "-block-start-1/2")
            .unwrap();
        assert_eq!(negated.entries, vec![decl("inset-block-start", "-50%")]);
    }
}
