use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// Logical corner radius utilities. Side prefixes round both corners of a
/// flow-relative side; corner prefixes round a single corner
/// (`rounded-ss` is the start-start corner).
pub fn border_radius(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "border-radius");
    let options = MatchOptions::default();
    let mut set = RuleSet::new();

    set.match_values("rounded-be", &values, &options, |value| {
        vec![decl("border-end-end-radius", value), decl("border-end-start-radius", value)]
    });
    set.match_values("rounded-bs", &values, &options, |value| {
        vec![decl("border-start-end-radius", value), decl("border-start-start-radius", value)]
    });
    set.match_values("rounded-ie", &values, &options, |value| {
        vec![decl("border-end-end-radius", value), decl("border-start-end-radius", value)]
    });
    set.match_values("rounded-is", &values, &options, |value| {
        vec![decl("border-end-start-radius", value), decl("border-start-start-radius", value)]
    });

    set.match_values("rounded-ee", &values, &options, |value| {
        vec![decl("border-end-end-radius", value)]
    });
    set.match_values("rounded-es", &values, &options, |value| {
        vec![decl("border-end-start-radius", value)]
    });
    set.match_values("rounded-se", &values, &options, |value| {
        vec![decl("border-start-end-radius", value)]
    });
    set.match_values("rounded-ss", &values, &options, |value| {
        vec![decl("border-start-start-radius", value)]
    });

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::Scale;

    #[test]
    fn default_key_yields_the_bare_prefix() {
        let mut theme = Theme::empty();
        theme.set_scale("border-radius", Scale::new().with("DEFAULT", "0.25rem"));
        let set = border_radius(&theme).unwrap();
        let classes: Vec<&str> = set.rules().iter().map(|rule| rule.class.as_str()).collect();
        assert!(classes.contains(&"rounded-be"));
        assert!(classes.contains(&"rounded-ss"));
    }
}
