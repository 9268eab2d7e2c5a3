use anyhow::Error;
use rules::{MatchOptions, RuleSet, ValueDomain, ValueType, decl};
use theme::Theme;

/// Logical border color utilities over the flattened palette (minus its
/// `DEFAULT` key). Same prefixes as [`crate::border_width`]; disjoint
/// properties. Every produced class carries the opacity keys as modifiers.
pub fn border_color(theme: &Theme) -> Result<RuleSet, Error> {
    let colors = ValueDomain::from_scale_without_default(theme, "border-color");
    let options = MatchOptions {
        types: vec![ValueType::Color, ValueType::Any],
        modifiers: ValueDomain::from_scale(theme, "opacity").keys(),
        ..MatchOptions::default()
    };
    let mut set = RuleSet::new();

    set.match_values("border-lb", &colors, &options, |value| {
        vec![decl("border-block-end-color", value), decl("border-block-start-color", value)]
    });
    set.match_values("border-li", &colors, &options, |value| {
        vec![decl("border-inline-end-color", value), decl("border-inline-start-color", value)]
    });

    set.match_values("border-be", &colors, &options, |value| {
        vec![decl("border-block-end-color", value)]
    });
    set.match_values("border-bs", &colors, &options, |value| {
        vec![decl("border-block-start-color", value)]
    });
    set.match_values("border-ie", &colors, &options, |value| {
        vec![decl("border-inline-end-color", value)]
    });
    set.match_values("border-is", &colors, &options, |value| {
        vec![decl("border-inline-start-color", value)]
    });

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::Scale;

    #[test]
    fn default_palette_key_is_dropped_and_modifiers_attach() {
        let mut theme = Theme::empty();
        theme.set_scale(
            "border-color",
            Scale::new()
                .with("DEFAULT", "#e5e7eb")
                .with("red-500", "#ef4444")
                .with("current", "currentColor"),
        );
        theme.set_scale("opacity", Scale::new().with("50", "0.5"));

        let set = border_color(&theme).unwrap();
        assert!(!set.rules().iter().any(|rule| rule.class == "border-be"));

        let red = set
            .rules()
            .iter()
            .find(|rule| rule.class == "border-be-red-500")
            .unwrap();
        assert_eq!(red.entries, vec![decl("border-block-end-color", "#ef4444")]);
        assert_eq!(red.modifiers, vec!["50".to_owned()]);

        let current = set
            .rules()
            .iter()
            .find(|rule| rule.class == "border-li-current")
            .unwrap();
        assert_eq!(
            current.entries,
            vec![
                decl("border-inline-end-color", "currentColor"),
                decl("border-inline-start-color", "currentColor"),
            ]
        );
    }
}
