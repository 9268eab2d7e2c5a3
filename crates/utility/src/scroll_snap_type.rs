use anyhow::Error;
use rules::{RuleSet, decl};
use theme::Theme;

/// Static per-axis scroll-snap-type utilities. Strictness comes from a
/// custom property so the strictness utilities of the compilation engine can
/// override it; without one it falls back to `proximity`.
pub fn scroll_snap_type(_theme: &Theme) -> Result<RuleSet, Error> {
    let mut set = RuleSet::new();
    set.push_static(
        "snap-block",
        vec![decl("scroll-snap-type", "block var(--snap-strictness, proximity)")],
    );
    set.push_static(
        "snap-inline",
        vec![decl("scroll-snap-type", "inline var(--snap-strictness, proximity)")],
    );
    Ok(set)
}
