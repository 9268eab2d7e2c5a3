use anyhow::Error;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain, ValueType};
use theme::Theme;

const CHILDREN: &str = "& > :not([hidden]) ~ :not([hidden])";

/// Between-children border utilities. `divide-b-*`/`divide-i-*` draw a
/// border on the axis between siblings; the `-reverse` classes flip which
/// edge carries it via the custom property the calc pair reads.
pub fn divide_width(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "divide-width");
    let options = MatchOptions {
        types: vec![ValueType::LineWidth, ValueType::Length, ValueType::Any],
        ..MatchOptions::default()
    };
    let mut set = RuleSet::new();

    set.match_values("divide-b", &values, &options, |value| {
        let value = normalize_zero(value);
        vec![Entry::block(
            CHILDREN,
            vec![
                Declaration::new("--divide-b-reverse", "0"),
                Declaration::new(
                    "border-block-end-width",
                    format!("calc({value} * var(--divide-b-reverse))"),
                ),
                Declaration::new(
                    "border-block-start-width",
                    format!("calc({value} * calc(1 - var(--divide-b-reverse)))"),
                ),
            ],
        )]
    });
    set.match_values("divide-i", &values, &options, |value| {
        let value = normalize_zero(value);
        vec![Entry::block(
            CHILDREN,
            vec![
                Declaration::new("--divide-i-reverse", "0"),
                Declaration::new(
                    "border-inline-end-width",
                    format!("calc({value} * var(--divide-i-reverse))"),
                ),
                Declaration::new(
                    "border-inline-start-width",
                    format!("calc({value} * calc(1 - var(--divide-i-reverse)))"),
                ),
            ],
        )]
    });

    set.push_static(
        "divide-b-reverse",
        vec![Entry::block(CHILDREN, vec![Declaration::new("--divide-b-reverse", "1")])],
    );
    set.push_static(
        "divide-i-reverse",
        vec![Entry::block(CHILDREN, vec![Declaration::new("--divide-i-reverse", "1")])],
    );

    Ok(set)
}

/// A calc over a unitless `0` is invalid, so the zero key renders as `0px`.
fn normalize_zero(value: &str) -> &str {
    if value == "0" { "0px" } else { value }
}
