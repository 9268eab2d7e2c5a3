use anyhow::Error;
use rules::{RuleSet, decl};
use theme::Theme;

const KEYWORDS: &[&str] = &["auto", "clip", "hidden", "scroll", "visible"];

/// Static per-axis overflow utilities (`overflow-block-auto`, ...).
pub fn overflow(_theme: &Theme) -> Result<RuleSet, Error> {
    let mut set = RuleSet::new();
    for keyword in KEYWORDS {
        set.push_static(format!("overflow-block-{keyword}"), vec![decl("overflow-block", *keyword)]);
    }
    for keyword in KEYWORDS {
        set.push_static(
            format!("overflow-inline-{keyword}"),
            vec![decl("overflow-inline", *keyword)],
        );
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_axes_cover_all_keywords() {
        let set = overflow(&Theme::empty()).unwrap();
        assert_eq!(set.len(), 10);
        assert!(set.rules().iter().any(|rule| {
            rule.class == "overflow-inline-scroll"
                && rule.entries == vec![decl("overflow-inline", "scroll")]
        }));
    }
}
