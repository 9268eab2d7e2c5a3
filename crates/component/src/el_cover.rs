use anyhow::Error;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A full-viewport cover with one centered principal element, parameterized
/// over the tag scale (the value names the centered child's selector).
/// `el-cover-mlb-*` tunes the block margin of the other children.
pub fn el_cover(theme: &Theme) -> Result<RuleSet, Error> {
    let tags = ValueDomain::from_scale(theme, "tag");
    let min_block = theme.require("min-block-size.dvb").to_owned();
    let pad = theme.require("padding.4").to_owned();
    let gap = theme.require("margin.4").to_owned();
    let zero = theme.require("margin.0").to_owned();
    let auto = theme.require("margin.auto").to_owned();

    let mut set = RuleSet::new();
    set.match_values("el-cover", &tags, &MatchOptions::default(), move |value| {
        vec![
            decl("display", "flex"),
            decl("flex-direction", "column"),
            decl("min-block-size", min_block.clone()),
            decl("padding", pad.clone()),
            Entry::block("& > *", vec![Declaration::new("margin-block", gap.clone())]),
            Entry::block(
                format!("& > :first-child:not({value})"),
                vec![Declaration::new("margin-block-start", zero.clone())],
            ),
            Entry::block(
                format!("& > :last-child:not({value})"),
                vec![Declaration::new("margin-block-end", zero.clone())],
            ),
            Entry::block(format!("& > {value}"), vec![Declaration::new("margin-block", auto.clone())]),
        ]
    });

    let margins = ValueDomain::from_scale(theme, "margin");
    set.match_values("el-cover-mlb", &margins, &MatchOptions::default(), |value| {
        vec![Entry::block("& > *", vec![Declaration::new("margin-block", value)])]
    });

    Ok(set)
}
