use anyhow::Error;
use rules::{RuleSet, decl};
use theme::Theme;

/// Static per-axis resize utilities.
pub fn resize(_theme: &Theme) -> Result<RuleSet, Error> {
    let mut set = RuleSet::new();
    set.push_static("resize-block", vec![decl("resize", "block")]);
    set.push_static("resize-inline", vec![decl("resize", "inline")]);
    Ok(set)
}
