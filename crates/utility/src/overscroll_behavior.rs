use anyhow::Error;
use rules::{RuleSet, decl};
use theme::Theme;

const KEYWORDS: &[&str] = &["auto", "contain", "none"];

/// Static per-axis overscroll-behavior utilities.
pub fn overscroll_behavior(_theme: &Theme) -> Result<RuleSet, Error> {
    let mut set = RuleSet::new();
    for keyword in KEYWORDS {
        set.push_static(
            format!("overscroll-block-{keyword}"),
            vec![decl("overscroll-behavior-block", *keyword)],
        );
    }
    for keyword in KEYWORDS {
        set.push_static(
            format!("overscroll-inline-{keyword}"),
            vec![decl("overscroll-behavior-inline", *keyword)],
        );
    }
    Ok(set)
}
