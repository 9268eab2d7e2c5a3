use anyhow::Error;
use rules::{Declaration, Entry, MatchOptions, RuleSet, ValueDomain, decl};
use theme::Theme;

/// A cropping media frame, parameterized over the aspect-ratio scale.
/// Replaced children fill the frame and crop with `object-fit: cover`.
pub fn el_frame(theme: &Theme) -> Result<RuleSet, Error> {
    let values = ValueDomain::from_scale(theme, "aspect-ratio");
    let full_block = theme.require("block-size.full").to_owned();
    let full_inline = theme.require("inline-size.full").to_owned();

    let mut set = RuleSet::new();
    set.match_values("el-frame", &values, &MatchOptions::default(), move |value| {
        vec![
            decl("align-items", "center"),
            decl("aspect-ratio", value),
            decl("display", "flex"),
            decl("justify-content", "center"),
            decl("overflow", "hidden"),
            Entry::block(
                "& > img, & > video",
                vec![
                    Declaration::new("block-size", full_block.clone()),
                    Declaration::new("inline-size", full_inline.clone()),
                    Declaration::new("object-fit", "cover"),
                ],
            ),
        ]
    });
    Ok(set)
}
