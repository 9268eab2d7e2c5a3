use anyhow::Error;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain};
use theme::Theme;

const CHILDREN: &str = "& > :not([hidden]) ~ :not([hidden])";

/// Between-children spacing utilities (`space-b-*`, `space-i-*`), the
/// margin analog of [`crate::divide_width`], with negative twins and the
/// `-reverse` flip classes.
pub fn space(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "space");
    let options = MatchOptions { negative: true, ..MatchOptions::default() };
    let mut set = RuleSet::new();

    set.match_values("space-b", &values, &options, |value| {
        let value = normalize_zero(value);
        vec![Entry::block(
            CHILDREN,
            vec![
                Declaration::new("--space-b-reverse", "0"),
                Declaration::new("margin-block-end", format!("calc({value} * var(--space-b-reverse))")),
                Declaration::new(
                    "margin-block-start",
                    format!("calc({value} * calc(1 - var(--space-b-reverse)))"),
                ),
            ],
        )]
    });
    set.match_values("space-i", &values, &options, |value| {
        let value = normalize_zero(value);
        vec![Entry::block(
            CHILDREN,
            vec![
                Declaration::new("--space-i-reverse", "0"),
                Declaration::new(
                    "margin-inline-end",
                    format!("calc({value} * var(--space-i-reverse))"),
                ),
                Declaration::new(
                    "margin-inline-start",
                    format!("calc({value} * calc(1 - var(--space-i-reverse)))"),
                ),
            ],
        )]
    });

    set.push_static(
        "space-b-reverse",
        vec![Entry::block(CHILDREN, vec![Declaration::new("--space-b-reverse", "1")])],
    );
    set.push_static(
        "space-i-reverse",
        vec![Entry::block(CHILDREN, vec![Declaration::new("--space-i-reverse", "1")])],
    );

    Ok(set)
}

fn normalize_zero(value: &str) -> &str {
    if value == "0" { "0px" } else { value }
}
