use anyhow::Error;
use rules::{RuleSet, decl};
use theme::Theme;

/// Static caption-side utilities using the logical keywords.
pub fn caption_side(_theme: &Theme) -> Result<RuleSet, Error> {
    let mut set = RuleSet::new();
    for keyword in ["block-end", "block-start", "inline-end", "inline-start"] {
        set.push_static(format!("caption-{keyword}"), vec![decl("caption-side", keyword)]);
    }
    Ok(set)
}
