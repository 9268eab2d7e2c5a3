//! The built-in theme: the scale tables every generator draws from when no
//! theme file overrides them.

use crate::{Scale, Theme};

/// The shared numeric spacing scale. Margin, padding, gap, inset and the
/// scroll scales all start from these keys.
const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

const FRACTIONS: &[(&str, &str)] = &[
    ("1/2", "50%"),
    ("1/3", "33.333333%"),
    ("2/3", "66.666667%"),
    ("1/4", "25%"),
    ("2/4", "50%"),
    ("3/4", "75%"),
    ("full", "100%"),
];

const BORDER_WIDTH: &[(&str, &str)] = &[
    ("DEFAULT", "1px"),
    ("0", "0px"),
    ("2", "2px"),
    ("4", "4px"),
    ("8", "8px"),
];

const BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

const MAX_INLINE_SIZE: &[(&str, &str)] = &[
    ("0", "0rem"),
    ("none", "none"),
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
    ("prose", "65ch"),
];

const OPACITY: &[(&str, &str)] = &[
    ("0", "0"),
    ("5", "0.05"),
    ("10", "0.1"),
    ("20", "0.2"),
    ("25", "0.25"),
    ("30", "0.3"),
    ("40", "0.4"),
    ("50", "0.5"),
    ("60", "0.6"),
    ("70", "0.7"),
    ("75", "0.75"),
    ("80", "0.8"),
    ("90", "0.9"),
    ("95", "0.95"),
    ("100", "1"),
];

/// Color palette, stored pre-flattened (`family-step`). A representative
/// subset of the sort of palette a design system actually ships.
const PALETTE: &[(&str, &str)] = &[
    ("DEFAULT", "#e5e7eb"),
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("gray-50", "#f9fafb"),
    ("gray-100", "#f3f4f6"),
    ("gray-200", "#e5e7eb"),
    ("gray-300", "#d1d5db"),
    ("gray-400", "#9ca3af"),
    ("gray-500", "#6b7280"),
    ("gray-600", "#4b5563"),
    ("gray-700", "#374151"),
    ("gray-800", "#1f2937"),
    ("gray-900", "#111827"),
    ("gray-950", "#030712"),
    ("red-50", "#fef2f2"),
    ("red-100", "#fee2e2"),
    ("red-200", "#fecaca"),
    ("red-300", "#fca5a5"),
    ("red-400", "#f87171"),
    ("red-500", "#ef4444"),
    ("red-600", "#dc2626"),
    ("red-700", "#b91c1c"),
    ("red-800", "#991b1b"),
    ("red-900", "#7f1d1d"),
    ("red-950", "#450a0a"),
    ("amber-50", "#fffbeb"),
    ("amber-100", "#fef3c7"),
    ("amber-200", "#fde68a"),
    ("amber-300", "#fcd34d"),
    ("amber-400", "#fbbf24"),
    ("amber-500", "#f59e0b"),
    ("amber-600", "#d97706"),
    ("amber-700", "#b45309"),
    ("amber-800", "#92400e"),
    ("amber-900", "#78350f"),
    ("amber-950", "#451a03"),
    ("emerald-50", "#ecfdf5"),
    ("emerald-100", "#d1fae5"),
    ("emerald-200", "#a7f3d0"),
    ("emerald-300", "#6ee7b7"),
    ("emerald-400", "#34d399"),
    ("emerald-500", "#10b981"),
    ("emerald-600", "#059669"),
    ("emerald-700", "#047857"),
    ("emerald-800", "#065f46"),
    ("emerald-900", "#064e3b"),
    ("emerald-950", "#022c22"),
    ("blue-50", "#eff6ff"),
    ("blue-100", "#dbeafe"),
    ("blue-200", "#bfdbfe"),
    ("blue-300", "#93c5fd"),
    ("blue-400", "#60a5fa"),
    ("blue-500", "#3b82f6"),
    ("blue-600", "#2563eb"),
    ("blue-700", "#1d4ed8"),
    ("blue-800", "#1e40af"),
    ("blue-900", "#1e3a8a"),
    ("blue-950", "#172554"),
];

fn from_pairs(pairs: &[(&str, &str)]) -> Scale {
    let mut scale = Scale::new();
    for (key, text) in pairs {
        scale.push(key, text);
    }
    scale
}

fn spacing_plus(extra: &[(&str, &str)]) -> Scale {
    let mut scale = from_pairs(SPACING);
    for (key, text) in extra {
        scale.push(key, text);
    }
    scale
}

/// Build the default theme.
pub fn default_theme() -> Theme {
    let mut theme = Theme::empty();

    theme.set_scale("spacing", from_pairs(SPACING));
    theme.set_scale("margin", spacing_plus(&[("auto", "auto")]));
    theme.set_scale("padding", from_pairs(SPACING));
    theme.set_scale("gap", from_pairs(SPACING));
    theme.set_scale("space", from_pairs(SPACING));
    theme.set_scale("scroll-margin", from_pairs(SPACING));
    theme.set_scale("scroll-padding", from_pairs(SPACING));

    let mut inset = spacing_plus(&[("auto", "auto")]);
    for (key, text) in FRACTIONS {
        inset.push(key, text);
    }
    theme.set_scale("inset", inset);

    theme.set_scale(
        "block-size",
        spacing_plus(&[
            ("auto", "auto"),
            ("full", "100%"),
            ("dvb", "100dvb"),
            ("min", "min-content"),
            ("max", "max-content"),
            ("fit", "fit-content"),
        ]),
    );
    theme.set_scale(
        "min-block-size",
        from_pairs(&[
            ("0", "0px"),
            ("full", "100%"),
            ("dvb", "100dvb"),
            ("min", "min-content"),
            ("max", "max-content"),
            ("fit", "fit-content"),
        ]),
    );
    theme.set_scale(
        "max-block-size",
        spacing_plus(&[
            ("none", "none"),
            ("full", "100%"),
            ("dvb", "100dvb"),
            ("min", "min-content"),
            ("max", "max-content"),
            ("fit", "fit-content"),
        ]),
    );
    theme.set_scale(
        "inline-size",
        spacing_plus(&[
            ("auto", "auto"),
            ("full", "100%"),
            ("dvi", "100dvi"),
            ("min", "min-content"),
            ("max", "max-content"),
            ("fit", "fit-content"),
        ]),
    );
    theme.set_scale(
        "min-inline-size",
        from_pairs(&[
            ("0", "0px"),
            ("full", "100%"),
            ("dvi", "100dvi"),
            ("min", "min-content"),
            ("max", "max-content"),
            ("fit", "fit-content"),
        ]),
    );
    theme.set_scale("max-inline-size", from_pairs(MAX_INLINE_SIZE));

    theme.set_scale("border-width", from_pairs(BORDER_WIDTH));
    theme.set_scale("divide-width", from_pairs(BORDER_WIDTH));
    theme.set_scale("border-radius", from_pairs(BORDER_RADIUS));
    theme.set_scale("border-color", from_pairs(PALETTE));
    theme.set_scale("opacity", from_pairs(OPACITY));

    let mut flex_basis = spacing_plus(&[("auto", "auto")]);
    for (key, text) in FRACTIONS {
        flex_basis.push(key, text);
    }
    theme.set_scale("flex-basis", flex_basis);
    theme.set_scale(
        "flex-grow",
        from_pairs(&[("DEFAULT", "1"), ("0", "0"), ("999", "999")]),
    );
    theme.set_scale(
        "flex",
        from_pairs(&[
            ("1", "1 1 0%"),
            ("auto", "1 1 auto"),
            ("initial", "0 1 auto"),
            ("none", "none"),
        ]),
    );

    theme.set_scale(
        "aspect-ratio",
        from_pairs(&[("auto", "auto"), ("square", "1 / 1"), ("video", "16 / 9")]),
    );
    theme.set_scale(
        "fraction",
        from_pairs(&[
            ("1/4", "0.25"),
            ("1/3", "0.333333"),
            ("1/2", "0.5"),
            ("2/3", "0.666667"),
            ("3/4", "0.75"),
        ]),
    );
    theme.set_scale(
        "nth-child",
        from_pairs(&[
            ("1", "1"),
            ("2", "2"),
            ("3", "3"),
            ("4", "4"),
            ("5", "5"),
            ("6", "6"),
        ]),
    );
    theme.set_scale(
        "tag",
        from_pairs(&[
            ("h1", "h1"),
            ("h2", "h2"),
            ("h3", "h3"),
            ("h4", "h4"),
            ("h5", "h5"),
            ("h6", "h6"),
            ("div", "div"),
            ("main", "main"),
        ]),
    );

    theme.set_scale(
        "font-family",
        Scale::new()
            .with(
                "sans",
                "ui-sans-serif, system-ui, sans-serif, 'Apple Color Emoji', \
                 'Segoe UI Emoji', 'Segoe UI Symbol', 'Noto Color Emoji'",
            )
            .with("serif", "ui-serif, Georgia, Cambria, 'Times New Roman', Times, serif")
            .with(
                "mono",
                "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \
                 'Liberation Mono', 'Courier New', monospace",
            ),
    );

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_defaults() {
        let theme = default_theme();
        assert_eq!(theme.token("spacing.4"), Some("1rem"));
        assert_eq!(theme.token("spacing.6"), Some("1.5rem"));
        assert_eq!(theme.token("margin.auto"), Some("auto"));
        assert_eq!(theme.token("border-width.DEFAULT"), Some("1px"));
        assert_eq!(theme.token("inset.1/2"), Some("50%"));
        assert_eq!(theme.token("min-block-size.dvb"), Some("100dvb"));
        assert_eq!(theme.token("border-color.red-500"), Some("#ef4444"));
        assert_eq!(theme.token("flex-grow.999"), Some("999"));
    }

    #[test]
    fn shared_scales_stay_in_sync_with_spacing() {
        let theme = default_theme();
        for scale in ["margin", "padding", "gap", "space", "scroll-margin", "scroll-padding"] {
            assert_eq!(theme.token(&format!("{scale}.4")), Some("1rem"), "{scale}");
        }
    }
}
