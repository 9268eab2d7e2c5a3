use anyhow::Error;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A horizontally scrolling strip, parameterized over the space scale for
/// the gap between items. `el-reel-basis-*` tunes the children's flex basis.
pub fn el_reel(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "space");
    let auto_block = theme.require("block-size.auto").to_owned();
    let none = theme.require("flex.none").to_owned();
    let full_block = theme.require("block-size.full").to_owned();
    let auto_basis = theme.require("flex-basis.auto").to_owned();
    let auto_inline = theme.require("inline-size.auto").to_owned();

    let mut set = RuleSet::new();
    set.match_values("el-reel", &values, &MatchOptions::default(), move |value| {
        vec![
            decl("block-size", auto_block.clone()),
            decl("display", "flex"),
            decl("overflow-x", "auto"),
            decl("overflow-y", "hidden"),
            Entry::block("& > *", vec![Declaration::new("flex", none.clone())]),
            Entry::block(
                "& > img",
                vec![
                    Declaration::new("block-size", full_block.clone()),
                    Declaration::new("flex-basis", auto_basis.clone()),
                    Declaration::new("inline-size", auto_inline.clone()),
                ],
            ),
            Entry::block("& > * + *", vec![Declaration::new("margin-inline-start", value)]),
        ]
    });

    let bases = ValueDomain::from_scale(theme, "flex-basis");
    set.match_values("el-reel-basis", &bases, &MatchOptions::default(), |value| {
        vec![Entry::block("& > *", vec![Declaration::new("flex-basis", value)])]
    });

    Ok(set)
}
