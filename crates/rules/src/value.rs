use theme::TokenValue;

/// Accepted-value restriction for a parameterized generator.
///
/// A domain entry is kept when *any* of the listed types accepts it, matching
/// how the original declares e.g. `["color", "any"]` on its color utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Any,
    Color,
    Length,
    LineWidth,
}

impl ValueType {
    pub fn accepts(self, value: &TokenValue) -> bool {
        match self {
            Self::Any => true,
            Self::Color => match value {
                TokenValue::Color(_) => true,
                TokenValue::Keyword(keyword) => keyword == "currentColor" || keyword == "inherit",
                _ => false,
            },
            Self::Length => is_length_like(value),
            Self::LineWidth => {
                if let TokenValue::Keyword(keyword) = value {
                    keyword == "thin" || keyword == "medium" || keyword == "thick"
                } else {
                    is_length_like(value)
                }
            }
        }
    }
}

fn is_length_like(value: &TokenValue) -> bool {
    match value {
        TokenValue::Length(_) => true,
        // Bare `0` counts as a length.
        TokenValue::Number(_) => value.is_zero(),
        TokenValue::Raw(raw) => raw.starts_with("calc(") || raw.starts_with("var("),
        _ => false,
    }
}

/// Sign-flip a token for negative utility variants. Only nonzero numeric
/// lengths and numbers are negatable; keywords, colors and zero stay `None`.
pub fn negate(value: &TokenValue) -> Option<String> {
    match value {
        TokenValue::Length(text) | TokenValue::Number(text) => {
            if value.is_zero() {
                None
            } else if let Some(positive) = text.strip_prefix('-') {
                Some(positive.to_owned())
            } else {
                Some(format!("-{text}"))
            }
        }
        _ => None,
    }
}
