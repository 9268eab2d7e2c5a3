use anyhow::Error;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

enum Side {
    Before,
    After,
}

/// A sidebar-and-content pair that wraps when the content drops below the
/// given fraction of the container. `el-sidebar-*` puts the sidebar first;
/// the `-after` forms put it last. The `-basis` forms tune the sidebar's
/// ideal width.
pub fn el_sidebar(theme: &Theme) -> Result<RuleSet, Error> {
    let fractions = ValueDomain::from_scale(theme, "fraction");
    let grow = theme.require("flex-grow.DEFAULT").to_owned();
    let grow_content = theme.require("flex-grow.999").to_owned();
    let basis_zero = theme.require("flex-basis.0").to_owned();
    let full = theme.require("min-inline-size.full").to_owned();

    let body = move |value: &str, side: &Side| -> Vec<Entry> {
        let (sidebar, content) = match side {
            Side::Before => ("& > :first-child", "& > :last-child"),
            Side::After => ("& > :last-child", "& > :first-child"),
        };
        vec![
            decl("display", "flex"),
            decl("flex-wrap", "wrap"),
            Entry::block(sidebar, vec![Declaration::new("flex-grow", grow.clone())]),
            Entry::block(
                content,
                vec![
                    Declaration::new("flex-basis", basis_zero.clone()),
                    Declaration::new("flex-grow", grow_content.clone()),
                    Declaration::new("min-inline-size", format!("calc({full} * {value})")),
                ],
            ),
        ]
    };

    let mut set = RuleSet::new();
    {
        let body = body.clone();
        set.match_values("el-sidebar", &fractions, &MatchOptions::default(), move |value| {
            body(value, &Side::Before)
        });
    }
    set.match_values("el-sidebar-after", &fractions, &MatchOptions::default(), move |value| {
        body(value, &Side::After)
    });

    let bases = ValueDomain::from_scale(theme, "flex-basis");
    set.match_values("el-sidebar-basis", &bases, &MatchOptions::default(), |value| {
        vec![Entry::block("& > :first-child", vec![Declaration::new("flex-basis", value)])]
    });
    set.match_values("el-sidebar-after-basis", &bases, &MatchOptions::default(), |value| {
        vec![Entry::block("& > :last-child", vec![Declaration::new("flex-basis", value)])]
    });

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::Scale;

    #[test]
    fn content_minimum_scales_by_the_fraction() {
        let mut theme = Theme::empty();
        theme.set_scale("fraction", Scale::new().with("1/2", "0.5"));
        theme.set_scale(
            "flex-grow",
            Scale::new().with("DEFAULT", "1").with("999", "999"),
        );
        theme.set_scale("flex-basis", Scale::new().with("0", "0px"));
        theme.set_scale("min-inline-size", Scale::new().with("full", "100%"));

        let set = el_sidebar(&theme).unwrap();
        let before = set.rules().iter().find(|rule| rule.class == "el-sidebar-1/2").unwrap();
        assert!(before.entries.iter().any(|entry| matches!(
            entry,
            Entry::Block { selector, declarations }
                if selector == "& > :last-child"
                    && declarations.iter().any(|d| d.value == "calc(100% * 0.5)")
        )));

        let after = set
            .rules()
            .iter()
            .find(|rule| rule.class == "el-sidebar-after-1/2")
            .unwrap();
        assert!(after.entries.iter().any(|entry| matches!(
            entry,
            Entry::Block { selector, declarations }
                if selector == "& > :first-child"
                    && declarations.iter().any(|d| d.property == "flex-basis")
        )));
    }
}
