use anyhow::Error;
use rules::{RuleSet, decl};
use theme::Theme;

/// Inline icon sizing tied to the surrounding text. The repeated
/// declarations are a fallback chain: `1cap` where supported, `0.75em`
/// otherwise.
pub fn el_icon(_theme: &Theme) -> Result<RuleSet, Error> {
    let mut set = RuleSet::new();
    set.push_static(
        "el-icon",
        vec![
            decl("block-size", "0.75em"),
            decl("block-size", "1cap"),
            decl("inline-size", "0.75em"),
            decl("inline-size", "1cap"),
        ],
    );
    Ok(set)
}
