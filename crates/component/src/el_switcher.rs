use anyhow::Error;
use log::warn;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A row that switches to a column once the container drops below the given
/// basis. `el-switcher-limit-*` forces the switch when more than n children
/// are present.
pub fn el_switcher(theme: &Theme) -> Result<RuleSet, Error> {
    let bases = ValueDomain::from_scale(theme, "flex-basis");
    let full = theme.require("flex-basis.full").to_owned();
    let grow = theme.require("flex-grow.DEFAULT").to_owned();

    let mut set = RuleSet::new();
    {
        let full = full.clone();
        set.match_values("el-switcher", &bases, &MatchOptions::default(), move |value| {
            vec![
                decl("display", "flex"),
                decl("flex-wrap", "wrap"),
                Entry::block(
                    "& > *",
                    vec![
                        Declaration::new("flex-basis", format!("calc(({value} - {full}) * 999)")),
                        Declaration::new("flex-grow", grow.clone()),
                    ],
                ),
            ]
        });
    }

    let positions = ValueDomain::from_scale(theme, "nth-child");
    set.match_values("el-switcher-limit", &positions, &MatchOptions::default(), move |value| {
        let Ok(limit) = value.parse::<usize>() else {
            warn!(target: "component", "nth-child value {value:?} is not a number, skipping limit body");
            return Vec::new();
        };
        let from = limit + 1;
        vec![Entry::block(
            format!("& > :nth-last-child(n + {from}), & > :nth-last-child(n + {from}) ~ *"),
            vec![Declaration::new("flex-basis", full.clone())],
        )]
    });

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme::Scale;

    #[test]
    fn limit_is_one_past_the_declared_count() {
        let mut theme = Theme::empty();
        theme.set_scale("flex-basis", Scale::new().with("full", "100%"));
        theme.set_scale("flex-grow", Scale::new().with("DEFAULT", "1"));
        theme.set_scale("nth-child", Scale::new().with("3", "3"));

        let set = el_switcher(&theme).unwrap();
        let limit = set
            .rules()
            .iter()
            .find(|rule| rule.class == "el-switcher-limit-3")
            .unwrap();
        assert!(limit.entries.iter().any(|entry| matches!(
            entry,
            Entry::Block { selector, .. }
                if selector == "& > :nth-last-child(n + 4), & > :nth-last-child(n + 4) ~ *"
        )));
    }

    #[test]
    fn switch_threshold_reads_the_basis_value() {
        let mut theme = Theme::empty();
        theme.set_scale("flex-basis", Scale::new().with("md", "28rem").with("full", "100%"));
        theme.set_scale("flex-grow", Scale::new().with("DEFAULT", "1"));

        let set = el_switcher(&theme).unwrap();
        let switcher = set.rules().iter().find(|rule| rule.class == "el-switcher-md").unwrap();
        assert!(switcher.entries.iter().any(|entry| matches!(
            entry,
            Entry::Block { declarations, .. }
                if declarations[0].value == "calc((28rem - 100%) * 999)"
        )));
    }
}
