use anyhow::Error;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A vertical stack with owned between-children spacing, parameterized over
/// the space scale. The `-recursive` form spaces every descendant, not just
/// direct children; `el-stack-split-*` pushes everything after the nth
/// child to the block end.
pub fn el_stack(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "space");
    let zero = theme.require("margin.0").to_owned();

    let body = move |value: &str, combinator: &str| -> Vec<Entry> {
        vec![
            decl("display", "flex"),
            decl("flex-direction", "column"),
            decl("justify-content", "flex-start"),
            Entry::block(
                format!("&{combinator} *"),
                vec![Declaration::new("margin-block", zero.clone())],
            ),
            Entry::block(
                format!("&{combinator} * + *"),
                vec![Declaration::new("margin-block-start", value)],
            ),
        ]
    };

    let options = MatchOptions { negative: true, ..MatchOptions::default() };
    let mut set = RuleSet::new();
    {
        let body = body.clone();
        set.match_values("el-stack", &values, &options, move |value| body(value, " >"));
    }
    set.match_values("el-stack-recursive", &values, &options, move |value| body(value, ""));

    let positions = ValueDomain::from_scale(theme, "nth-child");
    let full = theme.require("block-size.full").to_owned();
    let auto = theme.require("margin.auto").to_owned();
    set.match_values("el-stack-split", &positions, &MatchOptions::default(), move |value| {
        vec![
            Entry::block("&:only-child", vec![Declaration::new("block-size", full.clone())]),
            Entry::block(
                format!("& > :nth-child({value})"),
                vec![Declaration::new("margin-block-end", auto.clone())],
            ),
        ]
    });

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::Scale;

    fn stack_theme() -> Theme {
        let mut theme = Theme::empty();
        theme.set_scale("space", Scale::new().with("4", "1rem"));
        theme.set_scale("margin", Scale::new().with("0", "0px").with("auto", "auto"));
        theme.set_scale("nth-child", Scale::new().with("2", "2"));
        theme.set_scale("block-size", Scale::new().with("full", "100%"));
        theme
    }

    #[test]
    fn direct_and_recursive_combinators_differ() {
        let set = el_stack(&stack_theme()).unwrap();
        let direct = set.rules().iter().find(|rule| rule.class == "el-stack-4").unwrap();
        assert!(direct.entries.iter().any(|entry| matches!(
            entry,
            Entry::Block { selector, .. } if selector == "& > * + *"
        )));

        let recursive = set
            .rules()
            .iter()
            .find(|rule| rule.class == "el-stack-recursive-4")
            .unwrap();
        assert!(recursive.entries.iter().any(|entry| matches!(
            entry,
            Entry::Block { selector, .. } if selector == "& * + *"
        )));
    }

    #[test]
    fn split_targets_the_nth_child() {
        let set = el_stack(&stack_theme()).unwrap();
        let split = set.rules().iter().find(|rule| rule.class == "el-stack-split-2").unwrap();
        assert!(split.entries.iter().any(|entry| matches!(
            entry,
            Entry::Block { selector, declarations }
                if selector == "& > :nth-child(2)" && declarations[0].value == "auto"
        )));
    }
}
